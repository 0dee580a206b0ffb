use super::ast::Instruction;
use super::*;


fn lex_str(s: &str) -> Vec<Token> {
    match lex(s) {
        Ok(tokens) => tokens,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

fn kinds(s: &str) -> Vec<TokenKind> {
    lex_str(s).drain(..).map(|token| token.kind).collect()
}

fn build(s: &str) -> Vec<Instruction> {
    let tokens = lex_str(s);
    let tables = resolve(&tokens);
    match parse(&tokens, &tables) {
        Ok(instructions) => instructions,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}
