//! Property-based tests for the tokenizer.
//!
//! For arbitrary input, including text that is not valid Rust at all:
//! 1. Tiling: tokens cover the input exactly, in order, without gaps
//! 2. Progress: no token is empty and the step count stays linear
//! 3. Termination: every open mode is closed once the stream ends, and
//!    input made only of complete constructs leaves nothing unterminated

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use rustlex_core::{merge_adjacent, tokenize, Category, Lexer, LexerOptions, Mode, Token};

fn check_tiling(source: &str, tokens: &[Token<'_>]) -> Result<(), TestCaseError> {
    let mut at = 0;
    for token in tokens {
        prop_assert_eq!(token.offset, at);
        prop_assert!(!token.text.is_empty());
        prop_assert_eq!(&source[token.span()], token.text);
        at = token.end();
    }
    prop_assert_eq!(at, source.len());
    Ok(())
}

/// Fragments that open and close every mode, glued in random order.
fn code_like_strategy() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "fn", "const", "struct", "impl", "use", "import", " ", "\n", "\t", "x", "Foo", "a::b",
        "::*", "=", "<", ">>>=", "<->", "\"", "\\", "\\n", "'", "#[", "[", "]", "(", ")", "{",
        "}", "/*", "*/", "//", "*", "0x1F", "1.5e3", "42u8", "true", "int", "`", "€", "é",
    ]);
    prop::collection::vec(fragment, 0..48).prop_map(|parts| parts.concat())
}

/// Complete constructs only: every string, comment, character literal and
/// attribute is closed, and every declaration keyword has its name.
fn well_formed_strategy() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "fn f", "const C", "struct S", "impl T", "use a::b", "x", "1.5", "0x1F", "a::b",
        "(", ")", "{", "}", "=", "\"ab\"", "\"\\n\"", "\"\\q\"", "'x'", "'\\n'",
        "/* c */", "/**/", "// c\n", "#[a]", "#[a[b]]", "#[doc = \"s\"]", "\n", "\t",
    ]);
    prop::collection::vec(fragment, 0..32).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn arbitrary_text_is_tiled(source in any::<String>()) {
        let tokens: Vec<_> = tokenize(&source).collect();
        check_tiling(&source, &tokens)?;
    }

    #[test]
    fn code_like_text_is_tiled(source in code_like_strategy()) {
        let tokens: Vec<_> = tokenize(&source).collect();
        check_tiling(&source, &tokens)?;
    }

    #[test]
    fn steps_are_linear(source in code_like_strategy()) {
        let mut tokens = tokenize(&source);
        tokens.by_ref().for_each(drop);
        prop_assert!(tokens.steps() <= 2 * source.chars().count() + 1);
    }

    #[test]
    fn stream_ends_at_root(source in code_like_strategy()) {
        let mut tokens = tokenize(&source);
        tokens.by_ref().for_each(drop);
        prop_assert_eq!(tokens.mode_stack(), &[Mode::Root][..]);
        prop_assert_eq!(tokens.is_balanced(), tokens.unterminated().is_empty());
    }

    #[test]
    fn well_formed_text_is_balanced(source in well_formed_strategy()) {
        let mut tokens = tokenize(&source);
        tokens.by_ref().for_each(drop);
        prop_assert!(tokens.is_balanced(), "{:?} left {:?}", source, tokens.unterminated());
        prop_assert_eq!(tokens.mode_stack(), &[Mode::Root][..]);
    }

    #[test]
    fn unclassified_tokens_are_one_character(source in code_like_strategy()) {
        for token in tokenize(&source) {
            if token.category == Category::Unclassified {
                prop_assert_eq!(token.text.chars().count(), 1, "{:?}", token);
            }
        }
    }

    #[test]
    fn any_start_mode_tiles(source in code_like_strategy(), index in 0..Mode::COUNT) {
        let lexer = Lexer::new();
        let tokens: Vec<_> = lexer.tokens_from(&source, Mode::ALL[index]).collect();
        check_tiling(&source, &tokens)?;
    }

    #[test]
    fn prepared_text_is_tiled(source in code_like_strategy(), tab_size in 0usize..9) {
        let lexer = Lexer::with_options(LexerOptions {
            strip_nl: true,
            ensure_nl: true,
            normalize_newlines: true,
            tab_size,
            ..LexerOptions::default()
        });
        let prepared = lexer.prepare(&source);
        let tokens: Vec<_> = lexer.tokens(&prepared).collect();
        check_tiling(&prepared, &tokens)?;
    }

    #[test]
    fn merging_preserves_tiling(source in code_like_strategy()) {
        let merged: Vec<_> = merge_adjacent(&source, tokenize(&source)).collect();
        check_tiling(&source, &merged)?;
        for pair in merged.windows(2) {
            prop_assert_ne!(pair[0].category, pair[1].category);
        }
    }
}
