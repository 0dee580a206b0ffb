use crate::lang::Tables;

/// Capacity of the byte tape in the generated runtime.
pub const TAPE_SIZE: usize = 30000;
/// Capacity of the line-input buffer.
pub const MAX_INPUT: usize = 1024;
/// Buffer capacity for arrays declared without an explicit size.
pub const DEFAULT_ARRAY_SIZE: u32 = 1024;

/// The fixed runtime every generated program starts with: headers, the
/// zero-initialized tape, the cursor, the input buffer, one statically
/// sized buffer per declared array, the helper functions, and the
/// opening of the entry point.
pub fn prologue(tables: &Tables) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "#include <stdio.h>\n\
         #include <stdlib.h>\n\
         #include <string.h>\n\
         #include <stdint.h>\n\
         \n\
         #define TAPE_SIZE {}\n\
         #define MAX_INPUT {}\n\
         \n\
         uint8_t tape[TAPE_SIZE] = {{0}};\n\
         int ptr = 0;\n\
         char input_buffer[MAX_INPUT];\n",
        TAPE_SIZE, MAX_INPUT
    ));
    for (name, size) in tables.arrays() {
        let size = size.unwrap_or(DEFAULT_ARRAY_SIZE);
        s.push_str(&format!(
            "uint8_t doctorstrange_{}[{}] = {{0}};\n",
            name, size
        ));
    }
    s.push_str(HELPERS);
    s
}

/// Closes the entry point. A `thanos` statement returns before this.
pub const EPILOGUE: &str = "    return 0;\n}\n";

const HELPERS: &str = r#"
void thor() {
    printf("%c\n", tape[ptr]);
}

void thornum() {
    printf("%d\n", tape[ptr]);
}

void hulk(int direct_val, char direct_char) {
    if (direct_val != -1) {
        tape[ptr] = direct_val;
        return;
    }

    if (direct_char != 0) {
        tape[ptr] = direct_char;
        return;
    }

    printf("Hulk smash input: ");
    fflush(stdout);

    int ch = getchar();
    if (ch == EOF || ch == '\n') {
        tape[ptr] = 0;
    } else {
        tape[ptr] = ch;
        while ((ch = getchar()) != '\n' && ch != EOF);
    }
}

void blackpanther(uint8_t *target, const char *content) {
    if (content != NULL) {
        int i = 0;
        while (content[i] != '\0') {
            target[i] = content[i];
            i++;
        }
        target[i] = 0;
    } else {
        printf("Wakanda forever: ");
        fflush(stdout);

        fgets(input_buffer, MAX_INPUT, stdin);
        size_t len = strlen(input_buffer);

        if (len > 0 && input_buffer[len - 1] == '\n') {
            input_buffer[len - 1] = '\0';
            len--;
        }

        for (size_t i = 0; i < len; i++) {
            target[i] = input_buffer[i];
        }
        target[len] = 0;
    }
}

void captainamerica(uint8_t *source) {
    int i = 0;
    while (source[i] != 0) {
        putchar(source[i]);
        i++;
    }
    printf("\n");
}

int main() {
"#;
