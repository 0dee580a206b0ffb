/*!
## Rust Code Generation Module

This Rust module lowers the instruction sequence into freestanding C
source text implementing the fixed Hero runtime (byte tape, cursor,
input buffer, declared arrays).

*/

mod codegen;
mod runtime;

#[cfg(test)]
mod tests;

pub use codegen::generate;
pub use runtime::DEFAULT_ARRAY_SIZE;
pub use runtime::MAX_INPUT;
pub use runtime::TAPE_SIZE;
