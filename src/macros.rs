//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_TABLE_HANDLER!` - Creates a scan rule that matches a fixed pattern table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The token Category
/// * `$text` - The matched source text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Category::Literal, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $text:expr) => {
        Token {
            category: $category,
            text: $text,
        }
    };
}

/// Creates a scan rule for a table of fixed literals.
///
/// The generated function walks `$table` in order and emits a token of
/// `$category` for the first entry that starts at the cursor. Tables are kept
/// longest first, so the first hit is also the longest.
///
/// # Arguments
///
/// * `$name` - Name of the generated handler function
/// * `$table` - An ordered list of `&'static str` literals
/// * `$category` - The Category assigned to a match
///
/// # Example
///
/// ```ignore
/// MK_TABLE_HANDLER!(operator_handler, OPERATORS, Category::Operator);
/// ```
#[macro_export]
macro_rules! MK_TABLE_HANDLER {
    ($name:ident, $table:expr, $category:expr) => {
        fn $name(lexer: &mut Lexer) -> bool {
            let matched = $table
                .iter()
                .find(|pattern| lexer.remainder().starts_with(**pattern))
                .map(|pattern| pattern.len());

            match matched {
                Some(len) => {
                    lexer.emit($category, len);
                    true
                }
                None => false,
            }
        }
    };
}
