use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = [
        "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
        "case", "catch", "char", "char16_t", "char32_t", "class", "compl", "const", "constexpr",
        "const_cast", "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast",
        "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
        "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
        "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
        "reinterpret_cast", "return", "short", "signed", "sizeof", "static", "static_assert",
        "static_cast", "struct", "switch", "template", "this", "thread_local", "throw", "true",
        "try", "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void",
        "volatile", "wchar_t", "while", "xor", "xor_eq",
    ]
    .into_iter()
    .collect();

    /// Operator literals, longest first.
    pub static ref OPERATORS: Vec<&'static str> = longest_first(&[
        "<<=", ">>=", "++", "--", "->*", "->", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||",
        "*=", "/=", "%=", "+=", "-=", "&=", "^=", "|=", ".*", "+", "-", "*", "/", "%", "^", "&",
        "|", "~", "!", "=", "<", ">", ".", "?", ":", "#", "##", "::",
    ]);

    /// Delimiter literals, longest first.
    pub static ref DELIMITERS: Vec<&'static str> =
        longest_first(&["(", ")", "{", "}", "[", "]", ";", ",", ".", ":"]);
}

/// Stable sort by descending length, so a prefix never shadows a longer entry.
fn longest_first(patterns: &[&'static str]) -> Vec<&'static str> {
    let mut sorted: Vec<&'static str> = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        if !sorted.contains(pattern) {
            sorted.push(*pattern);
        }
    }

    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Delimiter,
    Unknown,
}

impl Category {
    /// Label used when tokens are grouped for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Keyword => "Keywords",
            Category::Identifier => "Identifiers",
            Category::Literal => "Literals",
            Category::Operator => "Operators",
            Category::Delimiter => "Delimiters",
            Category::Unknown => "Unknown",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self.category, self.text)
    }
}

impl Token {
    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }
}
