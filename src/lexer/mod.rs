//! Lexical analysis for C#-like source text.
//!
//! Tokenization runs in two phases:
//!
//! - The scanner walks the text once, splitting it into spans on whitespace,
//!   punctuation, quotes and comment starts. Strings and comments are
//!   classified here because their delimiters are unambiguous.
//! - The classifier resolves every remaining span through an ordered chain
//!   of table lookups and regex shapes.

pub mod classifier;
pub mod lexer;
pub mod scanner;
pub mod tokens;
