use hero::cgen::generate;
use hero::lang;

/// Run the whole source-to-C pipeline, panicking on any error.
pub fn compile_to_c(source: &str) -> String {
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

/// Run the pipeline and expect it to fail; returns the error display.
pub fn compile_err(source: &str) -> String {
    let tokens = match lang::lex(source) {
        Ok(tokens) => tokens,
        Err(e) => return e.to_string(),
    };
    let tables = lang::resolve(&tokens);
    match lang::parse(&tokens, &tables) {
        Ok(_) => panic!("expected a compilation error"),
        Err(e) => e.to_string(),
    }
}

/// The statements between the opening of main and the closing return.
pub fn main_body(c_source: &str) -> &str {
    let open = "int main() {\n";
    let start = c_source.find(open).expect("main") + open.len();
    let end = c_source.rfind("    return 0;\n}\n").expect("epilogue");
    &c_source[start..end]
}
