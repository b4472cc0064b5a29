use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::LOG_TARGET;

lazy_static! {
    /// Block comments, line comments and lines starting with `#`. Any of
    /// `\n`, `\r`, U+2028 and U+2029 ends a line. A stripped `#` line keeps
    /// the terminator in front of it (`eol`) so lines stay apart.
    static ref STRIPPED: Regex = Regex::new(
        r"/\*[\s\S]*?\*/|//[^\n\r\x{2028}\x{2029}]*|(?:\A|(?P<eol>[\n\r\x{2028}\x{2029}]))[\s\x{FEFF}]*#[^\n\r\x{2028}\x{2029}]*"
    )
    .unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"[\s\x{FEFF}]+").unwrap();
}

/// Produces canonical text: comments and `#` lines removed, every whitespace
/// run (byte order marks included) collapsed to one space, ends trimmed.
///
/// `#` lines are dropped wholesale, including directives continued with a
/// trailing backslash. Comment markers inside string literals are not
/// recognised as such.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();

    // Deleting a block comment can expose a `#` at the start of a line, so
    // strip until nothing matches.
    while STRIPPED.is_match(&text) {
        text = STRIPPED.replace_all(&text, "${eol}").into_owned();
        trace!(target: LOG_TARGET, bytes = text.len(), "stripped comments");
    }

    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
