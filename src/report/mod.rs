//! Presentation of lexer output.
//!
//! Groups tokens by category for display, keeping the first-seen order of
//! both categories and tokens, and renders the command line report.

pub mod table;

#[cfg(test)]
mod tests;
