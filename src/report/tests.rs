use crate::lexer::lexer::analyze;
use crate::lexer::tokens::{Category, Token};
use crate::MK_TOKEN;

use super::table::{render_report, TokenTable};

#[test]
fn test_table_dedups_in_first_seen_order() {
    let analysis = analyze("int b = a + b; int a = b;");
    let table = TokenTable::from_tokens(&analysis.tokens);

    assert_eq!(table.get(Category::Keyword), Some(vec!["int"]));
    assert_eq!(table.get(Category::Identifier), Some(vec!["b", "a"]));
    assert_eq!(table.get(Category::Operator), Some(vec!["=", "+"]));
    assert_eq!(table.get(Category::Unknown), None);
    assert_eq!(table.total(), 12);
}

#[test]
fn test_table_category_order() {
    let analysis = analyze("x = 1; int y;");
    let table = TokenTable::from_tokens(&analysis.tokens);
    let order: Vec<Category> = table.rows().map(|(category, _)| category).collect();

    assert_eq!(
        order,
        vec![
            Category::Identifier,
            Category::Operator,
            Category::Literal,
            Category::Delimiter,
            Category::Keyword,
        ]
    );
}

#[test]
fn test_table_insert() {
    let mut table = TokenTable::default();
    table.insert(&MK_TOKEN!(Category::Unknown, "@".to_string()));
    table.insert(&MK_TOKEN!(Category::Unknown, "@".to_string()));

    assert_eq!(table.get(Category::Unknown), Some(vec!["@"]));
    assert_eq!(table.total(), 2);
}

#[test]
fn test_table_display() {
    let analysis = analyze("return a >>= 2;");
    let table = TokenTable::from_tokens(&analysis.tokens);

    assert_eq!(
        table.to_string(),
        "Keywords: return\nIdentifiers: a\nOperators: >>=\nLiterals: 2\nDelimiters: ;\nTotal Tokens: 5"
    );
}

#[test]
fn test_empty_table_display() {
    assert_eq!(TokenTable::default().to_string(), "Total Tokens: 0");
}

#[test]
fn test_render_report() {
    let analysis = analyze("int x; // set x\n");

    assert_eq!(
        render_report(&analysis),
        "Processed Code:\nint x;\n\nTokens:\nKeywords: int\nIdentifiers: x\nDelimiters: ;\nTotal Tokens: 3\n"
    );
}
