//! Error types and error handling for the tokenizer.
//!
//! Tokenizing is total, so errors only come from the edges:
//!
//! - Missing or surplus command line input
//! - Source files that cannot be read
//! - Error names and suggestions for the command line report

pub mod errors;

#[cfg(test)]
mod tests;
