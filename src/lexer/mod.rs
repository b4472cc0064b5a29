//! Lexical analysis module for the tokenizer.
//!
//! This module turns raw source text into a flat stream of classified tokens.
//! It handles:
//!
//! - Normalization: comment and `#` line removal, whitespace collapsing
//! - Tokenization with ordered scan rules and longest-match pattern tables
//! - Classification into keywords, identifiers, literals, operators,
//!   delimiters and unknown characters

/// Target for every log event emitted while normalizing and scanning.
pub const LOG_TARGET: &str = "tokenizer::lexer";

pub mod lexer;
pub mod normalize;
pub mod tokens;
