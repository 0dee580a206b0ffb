use super::*;
use crate::lang;

fn generate_str(source: &str) -> String {
    let tokens = match lang::lex(source) {
        Ok(tokens) => tokens,
        Err(e) => panic!("{} : {:?}", e, e),
    };
    let tables = lang::resolve(&tokens);
    let instructions = match lang::parse(&tokens, &tables) {
        Ok(instructions) => instructions,
        Err(e) => panic!("{} : {:?}", e, e),
    };
    generate(&instructions, &tables)
}

/// The statements between the opening of main and the closing return.
fn body(c_source: &str) -> &str {
    let start = c_source.find("int main() {\n").expect("main") + "int main() {\n".len();
    let end = c_source.rfind("    return 0;\n}\n").expect("epilogue");
    &c_source[start..end]
}

#[test]
fn test_prologue() {
    let c = generate_str("");
    assert!(c.starts_with("#include <stdio.h>\n"));
    assert!(c.contains("#define TAPE_SIZE 30000\n"));
    assert!(c.contains("#define MAX_INPUT 1024\n"));
    assert!(c.contains("uint8_t tape[TAPE_SIZE] = {0};\n"));
    assert!(c.contains("char input_buffer[MAX_INPUT];\n"));
    assert!(c.ends_with("    return 0;\n}\n"));
}

#[test]
fn test_cell_and_cursor_statements() {
    assert_eq!(
        body(&generate_str("ironman batman superman wonderwoman deadpool")),
        "    tape[ptr]++;\n    tape[ptr]--;\n    ptr++;\n    ptr--;\n    ptr = 0;\n"
    );
}

#[test]
fn test_print_statements() {
    assert_eq!(
        body(&generate_str("thor\nthornum\n")),
        "    thor();\n    thornum();\n"
    );
    assert_eq!(
        body(&generate_str(r#"starlord "Hello""#)),
        "    printf(\"Hello\\n\");\n"
    );
}

#[test]
fn test_halt() {
    assert_eq!(
        body(&generate_str("thanos")),
        "    printf(\"Thanos snapped his fingers...\\n\");\n    return 0;\n"
    );
}

#[test]
fn test_wipe() {
    assert_eq!(
        body(&generate_str("loki")),
        "    tape[ptr] = 0;\n    printf(\"Loki cleared cell %d\\n\", ptr);\n"
    );
}

#[test]
fn test_labels_and_jumps() {
    let c = generate_str("falcon loop:\nironman\nhawkeye loop\n");
    // labels sit at column zero
    assert!(c.contains("\nloop:\n"));
    assert!(body(&c).contains("    goto loop;\n"));
}

#[test]
fn test_conditional_jump() {
    let c = generate_str("falcon end:\nspiderman end vision > 0\n");
    assert!(body(&c).contains("    if (tape[ptr] > 0) {\n        goto end;\n    }\n"));
    // `empty` compares against zero
    let c = generate_str("falcon end:\nspiderman end vision != empty\n");
    assert!(body(&c).contains("    if (tape[ptr] != 0) {\n"));
    // `=` and `==` both come out as C equality
    let c = generate_str("falcon end:\nspiderman end vision = 5\n");
    assert!(body(&c).contains("    if (tape[ptr] == 5) {\n"));
}

#[test]
fn test_incomplete_conditional_jump() {
    let c = generate_str("spiderman end vision >\n");
    assert_eq!(body(&c), "    /* spiderman: incomplete comparison */\n");
    assert!(!c.contains("goto"));
}

#[test]
fn test_arithmetic() {
    assert_eq!(
        body(&generate_str("add vision 3")),
        "    tape[ptr] += 3;\n"
    );
    // a bare integer on the left addresses the tape
    assert_eq!(body(&generate_str("add 5 #2")), "    tape[5] += tape[2];\n");
    assert_eq!(
        body(&generate_str("sub vision vision")),
        "    tape[ptr] -= tape[ptr];\n"
    );
    assert_eq!(
        body(&generate_str("sub vision")),
        "    /* -=: missing operand */\n"
    );
}

#[test]
fn test_read() {
    assert_eq!(body(&generate_str("hulk")), "    hulk(-1, 0);\n");
    assert_eq!(body(&generate_str("hulk 65")), "    hulk(65, 0);\n");
    // only the first character of a string operand is taken
    assert_eq!(
        body(&generate_str(r#"hulk "yes""#)),
        "    hulk(-1, 'y');\n"
    );
    assert_eq!(body(&generate_str(r#"hulk """#)), "    hulk(-1, 0);\n");
}

#[test]
fn test_store() {
    assert_eq!(
        body(&generate_str("blackpanther")),
        "    blackpanther(tape + ptr, NULL);\n"
    );
    assert_eq!(
        body(&generate_str(r#"blackpanther "hi""#)),
        "    blackpanther(tape + ptr, \"hi\");\n"
    );
    assert_eq!(
        body(&generate_str("doctorstrange name\nblackpanther into name\n")),
        "    blackpanther(doctorstrange_name, NULL);\n"
    );
    assert_eq!(
        body(&generate_str("blackpanther into 7")),
        "    blackpanther(tape + 7, NULL);\n"
    );
    // an undeclared name is written out as a tape offset expression
    assert_eq!(
        body(&generate_str("blackpanther into nowhere")),
        "    blackpanther(tape + nowhere, NULL);\n"
    );
}

#[test]
fn test_print_buf() {
    assert_eq!(
        body(&generate_str("doctorstrange name\ncaptainamerica name\n")),
        "    captainamerica(doctorstrange_name);\n"
    );
    // unknown names fall back to the cursor
    assert_eq!(
        body(&generate_str("captainamerica nowhere")),
        "    captainamerica(tape + ptr);\n"
    );
    assert_eq!(
        body(&generate_str("captainamerica")),
        "    captainamerica(tape + ptr);\n"
    );
}

#[test]
fn test_array_declarations() {
    let c = generate_str("doctorstrange 64 small\ndoctorstrange big\n");
    assert!(c.contains("uint8_t doctorstrange_small[64] = {0};\n"));
    assert!(c.contains("uint8_t doctorstrange_big[1024] = {0};\n"));
    // the declaration statement itself emits nothing into main
    assert_eq!(body(&c), "");
}

#[test]
fn test_redeclared_array_uses_last_size() {
    let c = generate_str("doctorstrange 4 buf\ndoctorstrange 8 buf\n");
    // exactly one buffer, sized by the later declaration
    assert!(c.contains("uint8_t doctorstrange_buf[8] = {0};\n"));
    assert_eq!(c.matches("uint8_t doctorstrange_buf").count(), 1);
}

#[test]
fn test_loop_definition_and_call() {
    let c = generate_str("flash greet\n    ironman\nfalcon main:\ngreet\n");
    // marker at the definition site, body re-emitted there, marker at the call
    assert_eq!(
        body(&c),
        "    // Flash loop: greet\n    tape[ptr]++;\nmain:\n    // Flash loop: greet\n"
    );
}
