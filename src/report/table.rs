use std::fmt::Display;

use indexmap::{IndexMap, IndexSet};

use crate::lexer::{
    lexer::Analysis,
    tokens::{Category, Token},
};

/// Unique token texts per category, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    categories: IndexMap<Category, IndexSet<String>>,
    total: usize,
}

impl TokenTable {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut table = TokenTable::default();
        for token in tokens {
            table.insert(token);
        }

        table
    }

    pub fn insert(&mut self, token: &Token) {
        self.categories
            .entry(token.category)
            .or_default()
            .insert(token.text.clone());
        self.total += 1;
    }

    /// Number of tokens inserted, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, category: Category) -> Option<Vec<&str>> {
        self.categories
            .get(&category)
            .map(|texts| texts.iter().map(String::as_str).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = (Category, Vec<&str>)> {
        self.categories
            .iter()
            .map(|(category, texts)| (*category, texts.iter().map(String::as_str).collect()))
    }
}

impl Display for TokenTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (category, texts) in self.rows() {
            writeln!(f, "{}: {}", category, texts.join(", "))?;
        }

        write!(f, "Total Tokens: {}", self.total)
    }
}

pub fn render_report(analysis: &Analysis) -> String {
    let table = TokenTable::from_tokens(&analysis.tokens);

    format!(
        "Processed Code:\n{}\n\nTokens:\n{}\n",
        analysis.normalized, table
    )
}
