use tracing::{debug, trace};

use crate::{MK_TABLE_HANDLER, MK_TOKEN};

use super::{
    normalize::normalize,
    LOG_TARGET,
    tokens::{is_keyword, Category, Token, DELIMITERS, OPERATORS},
};

/// A scan rule. Returns `true` when it consumed input at the cursor.
pub type RuleHandler = fn(&mut Lexer) -> bool;

#[derive(Clone, Copy)]
pub struct ScanRule {
    pub name: &'static str,
    handler: RuleHandler,
}

/// Scan rules in priority order. The first rule that matches wins the step.
pub static RULES: [ScanRule; 7] = [
    ScanRule { name: "whitespace", handler: skip_handler },
    ScanRule { name: "word", handler: word_handler },
    ScanRule { name: "number", handler: number_handler },
    ScanRule { name: "quoted", handler: quoted_handler },
    ScanRule { name: "operator", handler: operator_handler },
    ScanRule { name: "delimiter", handler: delimiter_handler },
    ScanRule { name: "unknown", handler: unknown_handler },
];

#[derive(Clone, Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Emits the next `len` bytes as a token and moves past them.
    pub fn emit(&mut self, category: Category, len: usize) {
        let text = self.source[self.pos..self.pos + len].to_string();
        trace!(target: LOG_TARGET, pos = self.pos, %category, text = text.as_str(), "token");
        self.push(MK_TOKEN!(category, text));
        self.advance_n(len);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Runs one scan step and returns the rule that handled it.
    pub fn step(&mut self) -> Option<&'static str> {
        if self.at_eof() {
            return None;
        }

        for rule in RULES.iter() {
            if (rule.handler)(self) {
                return Some(rule.name);
            }
        }

        None
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Unicode whitespace plus the byte order mark.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn skip_handler(lexer: &mut Lexer) -> bool {
    match lexer.at() {
        Some(c) if is_blank(c) => {
            lexer.advance_n(c.len_utf8());
            true
        }
        _ => false,
    }
}

fn is_word_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_word_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn word_handler(lexer: &mut Lexer) -> bool {
    let bytes = lexer.remainder().as_bytes();
    if !bytes.first().is_some_and(|b| is_word_start(*b)) {
        return false;
    }

    let len = bytes.iter().take_while(|b| is_word_continue(**b)).count();
    let category = if is_keyword(&lexer.remainder()[..len]) {
        Category::Keyword
    } else {
        Category::Identifier
    };

    lexer.emit(category, len);
    true
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn number_handler(lexer: &mut Lexer) -> bool {
    let bytes = lexer.remainder().as_bytes();
    let mut len = digit_run(bytes);
    if len == 0 {
        return false;
    }

    // A fraction needs at least one digit after the point.
    if bytes.get(len) == Some(&b'.') {
        let fraction = digit_run(&bytes[len + 1..]);
        if fraction > 0 {
            len += 1 + fraction;
        }
    }

    lexer.emit(Category::Literal, len);
    true
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Length of a quoted literal at the start of `rest`, or `None` when it is
/// unterminated or ends in an escaped line break.
fn quoted_len(rest: &str, quote: char) -> Option<usize> {
    let mut chars = rest.char_indices().skip(1);

    while let Some((i, c)) = chars.next() {
        if c == quote {
            return Some(i + c.len_utf8());
        }

        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) if !is_line_terminator(escaped) => {}
                _ => return None,
            }
        }
    }

    None
}

fn quoted_handler(lexer: &mut Lexer) -> bool {
    let quote = match lexer.at() {
        Some(c @ ('"' | '\'')) => c,
        _ => return false,
    };

    match quoted_len(lexer.remainder(), quote) {
        Some(len) => {
            lexer.emit(Category::Literal, len);
            true
        }
        None => false,
    }
}

MK_TABLE_HANDLER!(operator_handler, OPERATORS, Category::Operator);
MK_TABLE_HANDLER!(delimiter_handler, DELIMITERS, Category::Delimiter);

fn unknown_handler(lexer: &mut Lexer) -> bool {
    match lexer.at() {
        Some(c) => {
            lexer.emit(Category::Unknown, c.len_utf8());
            true
        }
        None => false,
    }
}

/// Splits canonical text into tokens.
///
/// Never fails: anything no rule recognises becomes a one-character
/// `Unknown` token, so every non-whitespace character lands in some token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source.to_string());

    while lex.step().is_some() {}

    let tokens = lex.into_tokens();
    debug!(target: LOG_TARGET, bytes = source.len(), tokens = tokens.len(), "tokenized");
    tokens
}

/// Normalized source plus the tokens scanned from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub normalized: String,
    pub tokens: Vec<Token>,
}

pub fn analyze(raw: &str) -> Analysis {
    let normalized = normalize(raw);
    let tokens = tokenize(&normalized);

    Analysis { normalized, tokens }
}
