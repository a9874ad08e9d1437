use pretty_assertions::assert_eq;

use super::*;

fn apply<'s>(rule: &Rule, rest: &'s str) -> Option<(usize, Vec<Token<'s>>)> {
    let mut out = Emitted::new();
    let len = rule.apply(rest, 0, &mut out)?;
    Some((len, out.into_vec()))
}

// === Matchers ===

#[test]
fn literal_matches_exact_prefix() {
    let rule = Rule::literal("<->", Category::OperatorSwap).unwrap();
    assert_eq!(rule.matcher().match_len("<-> b"), Some(3));
    assert_eq!(rule.matcher().match_len("<- b"), None);
}

#[test]
fn empty_literal_is_rejected() {
    assert!(matches!(
        Rule::literal("", Category::Punctuation),
        Err(RuleError::EmptyLiteral)
    ));
}

#[test]
fn words_respect_identifier_boundary() {
    let rule = Rule::words(&["fn", "for"], Category::Keyword).unwrap();
    assert_eq!(rule.matcher().match_len("fn foo"), Some(2));
    assert_eq!(rule.matcher().match_len("fn(x)"), Some(2));
    assert_eq!(rule.matcher().match_len("fna"), None);
    assert_eq!(rule.matcher().match_len("fn_x"), None);
    assert_eq!(rule.matcher().match_len("for"), Some(3));
    assert_eq!(rule.matcher().match_len(" fn"), None);
}

#[test]
fn empty_word_list_is_rejected() {
    let words: [&str; 0] = [];
    assert!(matches!(
        Rule::words(&words, Category::Keyword),
        Err(RuleError::EmptyWordList)
    ));
}

#[test]
fn word_set_lookup() {
    let set = WordSet::new(&["int", "uint"]).unwrap();
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
    assert!(set.contains("uint"));
    assert!(!set.contains("u"));
}

#[test]
fn pattern_is_anchored() {
    let rule = Rule::pattern(r"[0-9]+", Category::NumberInteger).unwrap();
    assert_eq!(rule.matcher().match_len("123abc"), Some(3));
    assert_eq!(rule.matcher().match_len("abc123"), None);
}

#[test]
fn pattern_never_matches_empty() {
    let rule = Rule::pattern(r"[0-9]*", Category::NumberInteger).unwrap();
    assert_eq!(rule.matcher().match_len("abc"), None);
}

#[test]
fn alternation_is_anchored_as_a_whole() {
    let rule = Rule::pattern(r"a|b", Category::Name).unwrap();
    assert_eq!(rule.matcher().match_len("xb"), None);
}

#[test]
fn invalid_pattern_is_reported() {
    let err = Rule::pattern(r"(unclosed", Category::Name).unwrap_err();
    assert!(matches!(err, RuleError::InvalidPattern { .. }));
    assert!(err.to_string().contains("(unclosed"));
}

#[test]
fn group_count_must_match_categories() {
    let err = Rule::groups(r"(a)(b)", &[Category::Name]).unwrap_err();
    assert!(matches!(
        err,
        RuleError::GroupMismatch {
            groups: 2,
            categories: 1,
            ..
        }
    ));
}

// === Actions ===

#[test]
fn emit_covers_whole_match() {
    let rule = Rule::pattern(r"//[^\n]*", Category::CommentSingle).unwrap();
    let (len, tokens) = apply(&rule, "// hi\nx").unwrap();
    assert_eq!(len, 5);
    assert_eq!(tokens, vec![Token::new(Category::CommentSingle, "// hi", 0)]);
}

#[test]
fn by_groups_emits_one_token_per_group() {
    let rule = Rule::groups(
        r"([a-z]+)(\s*)(=)",
        &[Category::NameNamespace, Category::Whitespace, Category::OperatorBinary],
    )
    .unwrap();
    let (len, tokens) = apply(&rule, "io = x").unwrap();
    assert_eq!(len, 4);
    assert_eq!(
        tokens,
        vec![
            Token::new(Category::NameNamespace, "io", 0),
            Token::new(Category::Whitespace, " ", 2),
            Token::new(Category::OperatorBinary, "=", 3),
        ]
    );
}

#[test]
fn by_groups_skips_empty_groups() {
    let rule = Rule::groups(
        r"([a-z]+)(\s*)(=)",
        &[Category::NameNamespace, Category::Whitespace, Category::OperatorBinary],
    )
    .unwrap();
    let (_, tokens) = apply(&rule, "io=x").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(Category::NameNamespace, "io", 0),
            Token::new(Category::OperatorBinary, "=", 2),
        ]
    );
}

#[test]
fn by_groups_fills_gaps_with_unclassified() {
    let rule = Rule::groups(r"(a)-(b)", &[Category::Name, Category::Name]).unwrap();
    let (len, tokens) = apply(&rule, "a-b").unwrap();
    assert_eq!(len, 3);
    assert_eq!(
        tokens,
        vec![
            Token::new(Category::Name, "a", 0),
            Token::new(Category::Unclassified, "-", 1),
            Token::new(Category::Name, "b", 2),
        ]
    );
}

#[test]
fn apply_offsets_are_absolute() {
    let rule = Rule::literal("::", Category::Punctuation).unwrap();
    let mut out = Emitted::new();
    assert_eq!(rule.apply(":: x", 10, &mut out), Some(2));
    assert_eq!(out[0].offset, 10);
}

// === Transitions ===

#[test]
fn transition_builders() {
    let rule = Rule::literal("\"", Category::String).unwrap();
    assert_eq!(rule.transition(), Transition::None);
    let rule = rule.push(Mode::String);
    assert_eq!(rule.transition(), Transition::Push(Mode::String));
    let rule = rule.pop();
    assert_eq!(rule.transition(), Transition::Pop);
    let rule = rule.replace(Mode::Character);
    assert_eq!(rule.transition(), Transition::Replace(Mode::Character));
}

#[test]
fn ident_run() {
    assert_eq!(ident_run_len("abc def"), 3);
    assert_eq!(ident_run_len("a_1("), 3);
    assert_eq!(ident_run_len("été!"), "été".len());
    assert_eq!(ident_run_len("(x"), 0);
    assert_eq!(ident_run_len("xyz"), 3);
}

#[test]
fn ident_run_uses_xid_continue() {
    // `·` continues an identifier, `²` does not.
    assert_eq!(ident_run_len("fn·x"), "fn·x".len());
    assert_eq!(ident_run_len("fn²"), 2);
    assert!(is_ident_continue('·'));
    assert!(is_ident_continue('_'));
    assert!(!is_ident_continue('²'));
    assert!(!is_ident_continue('-'));
}

#[test]
fn words_split_where_identifiers_split() {
    let rule = Rule::words(&["fn"], Category::Keyword).unwrap();
    assert_eq!(rule.matcher().match_len("fn²"), Some(2));
    assert_eq!(rule.matcher().match_len("fn·x"), None);
}
