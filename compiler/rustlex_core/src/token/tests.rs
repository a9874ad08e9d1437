use pretty_assertions::assert_eq;

use super::*;

#[test]
fn span_and_end() {
    let tok = Token::new(Category::Name, "foo", 4);
    assert_eq!(tok.len(), 3);
    assert_eq!(tok.end(), 7);
    assert_eq!(tok.span(), 4..7);
    assert!(!tok.is_empty());
}

#[test]
fn merge_coalesces_equal_neighbours() {
    let source = "abc";
    let tokens = vec![
        Token::new(Category::String, "a", 0),
        Token::new(Category::String, "b", 1),
        Token::new(Category::StringEscape, "c", 2),
    ];
    let merged: Vec<_> = merge_adjacent(source, tokens).collect();
    assert_eq!(
        merged,
        vec![
            Token::new(Category::String, "ab", 0),
            Token::new(Category::StringEscape, "c", 2),
        ]
    );
}

#[test]
fn merge_keeps_interleaved_categories() {
    let source = "a b";
    let tokens = vec![
        Token::new(Category::Name, "a", 0),
        Token::new(Category::Whitespace, " ", 1),
        Token::new(Category::Name, "b", 2),
    ];
    let merged: Vec<_> = merge_adjacent(source, tokens.clone()).collect();
    assert_eq!(merged, tokens);
}

#[test]
fn merge_of_empty_stream_is_empty() {
    assert_eq!(merge_adjacent("", Vec::new()).count(), 0);
}
