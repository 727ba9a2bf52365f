//! Error types for the tokenizer's I/O collaborators.
//!
//! Tokenization is total and never fails. The only failures come from the
//! surrounding plumbing:
//!
//! - Reading the source text (`InputUnavailable`)
//! - Writing the token listing (`OutputFailed`)

pub mod errors;
