//! # Hero
//!
//! A compiler for the Hero programming language, a line-oriented
//! Brainfuck dialect where every statement keyword is a superhero.
//! Source is translated to freestanding C implementing a fixed runtime
//! (a 30000-byte tape, one cursor, named byte arrays) and handed to an
//! external C compiler for the final executable.
//!
//! ```text
//! hero> count to two and show it
//! ironman
//! ironman
//! thornum
//! thanos
//! ```

pub mod cgen;
pub mod compile;
pub mod lang;
