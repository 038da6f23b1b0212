//! Lexical analysis for Doodle
//!
//! Converts source text into a flat sequence of token strings.

mod tokenizer;

pub use tokenizer::{tokenize, RULES};
