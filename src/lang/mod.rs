/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the Hero
language: the lexer, the resolver (first parser pass, building the
label/loop/array tables), and the instruction builder (second parser
pass).

*/

#[macro_use]
mod error;
mod lex;
mod parse;
mod resolve;
mod token;

pub mod ast;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::parse;
pub use resolve::resolve;
pub use resolve::Tables;
pub use token::Literal;
pub use token::Operator;
pub use token::Token;
pub use token::TokenKind;
pub use token::Word;

/// 1-based source line number.
pub type LineNumber = usize;
