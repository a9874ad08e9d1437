use std::borrow::Cow;

use super::*;

#[test]
fn defaults_leave_input_borrowed() {
    let options = LexerOptions::default();
    assert!(!options.rewrites_input());
    let source = "\n fn main() {}\t\n";
    assert!(matches!(options.prepare(source), Cow::Borrowed(s) if s == source));
}

#[test]
fn strip_nl_keeps_other_whitespace() {
    let options = LexerOptions {
        strip_nl: true,
        ..LexerOptions::default()
    };
    assert_eq!(options.prepare("\n\n  x  \n"), "  x  ");
}

#[test]
fn strip_all_trims_everything() {
    let options = LexerOptions {
        strip_all: true,
        ..LexerOptions::default()
    };
    assert_eq!(options.prepare("\n\t x \n"), "x");
}

#[test]
fn ensure_nl_appends_once() {
    let options = LexerOptions {
        ensure_nl: true,
        ..LexerOptions::default()
    };
    assert_eq!(options.prepare("x"), "x\n");
    assert_eq!(options.prepare("x\n"), "x\n");
    assert_eq!(options.prepare(""), "\n");
}

#[test]
fn normalize_newlines() {
    let options = LexerOptions {
        normalize_newlines: true,
        ..LexerOptions::default()
    };
    assert_eq!(options.prepare("a\r\nb\rc"), "a\nb\nc");
}

#[test]
fn tabs_expand_to_next_stop() {
    let options = LexerOptions {
        tab_size: 4,
        ..LexerOptions::default()
    };
    assert_eq!(options.prepare("\tx"), "    x");
    assert_eq!(options.prepare("ab\tx"), "ab  x");
    assert_eq!(options.prepare("abcd\tx"), "abcd    x");
    assert_eq!(options.prepare("a\n\tb"), "a\n    b");
}

#[test]
fn strip_then_ensure_nl() {
    let options = LexerOptions {
        strip_all: true,
        ensure_nl: true,
        ..LexerOptions::default()
    };
    assert_eq!(options.prepare("  x  "), "x\n");
}

#[test]
fn start_mode_is_kebab_case() {
    let options = LexerOptions {
        start_mode: Mode::CommentBlock,
        ..LexerOptions::default()
    };
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains(r#""start_mode":"comment-block""#), "{json}");
    let back: LexerOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn missing_fields_take_defaults() {
    let options: LexerOptions = serde_json::from_str(r#"{"tab_size": 8}"#).unwrap();
    assert_eq!(options.tab_size, 8);
    assert_eq!(options.start_mode, Mode::Root);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<LexerOptions>(r#"{"tabsize": 8}"#).is_err());
}
