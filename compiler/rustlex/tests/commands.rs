//! End-to-end tests of the command handlers.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use rustlex::commands::{
    describe, file_stats, match_path, parse_options, render_tokens, stats_files, tokens_files,
    CliOptions,
};
use rustlex::CliError;
use rustlex_core::{Category, Lexer, LexerOptions, Mode};

const MAIN_RS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs");

#[test]
fn tokens_render_as_aligned_lines() {
    let report = render_tokens("fn f", &CliOptions::default()).unwrap();
    assert_eq!(
        report.lines,
        [
            format!("{:>6} {:<28} {:?}", 0, "Keyword", "fn"),
            format!("{:>6} {:<28} {:?}", 2, "Whitespace", " "),
            format!("{:>6} {:<28} {:?}", 3, "Name.Function", "f"),
        ]
    );
    assert!(report.unterminated.is_empty());
}

#[test]
fn json_lines_carry_offsets_and_dotted_categories() {
    let options = CliOptions {
        json: true,
        only: Some(Category::NameConstant),
        ..CliOptions::default()
    };
    let report = render_tokens("const MAX = 1;", &options).unwrap();
    assert_eq!(report.lines.len(), 1);

    let value: serde_json::Value = serde_json::from_str(&report.lines[0]).unwrap();
    assert_eq!(value["offset"], 6);
    assert_eq!(value["len"], 3);
    assert_eq!(value["category"], "Name.Constant");
    assert_eq!(value["text"], "MAX");
}

#[test]
fn merge_coalesces_string_pieces() {
    let options = CliOptions {
        merge: true,
        only: Some(Category::String),
        ..CliOptions::default()
    };
    let report = render_tokens(r#"let s = "ab";"#, &options).unwrap();
    assert_eq!(report.lines.len(), 1);
    assert!(report.lines[0].ends_with(r#""\"ab\"""#), "{}", report.lines[0]);
}

#[test]
fn unterminated_modes_are_reported() {
    let report = render_tokens("/* open", &CliOptions::default()).unwrap();
    assert_eq!(report.unterminated, [Mode::CommentBlock]);
}

#[test]
fn start_mode_flag_reaches_the_lexer() {
    let (options, _) = parse_options(&["--start=string".to_string()]).unwrap();
    let report = render_tokens("tail\"", &options).unwrap();
    assert_eq!(report.lines.len(), 2);
    assert!(report.unterminated.is_empty());
}

#[test]
fn stats_count_every_token() {
    let lexer = Lexer::new();
    let stats = file_stats("x.rs", "let x = 1; let y = x;", &lexer);
    assert_eq!(stats.bytes, 21);
    assert_eq!(stats.counts[&Category::Keyword], 2);
    assert_eq!(stats.counts[&Category::Name], 3);
    assert_eq!(stats.counts.values().sum::<usize>(), stats.tokens);
}

#[test]
fn stats_use_prepared_text() {
    let lexer = Lexer::with_options(LexerOptions {
        ensure_nl: true,
        ..LexerOptions::default()
    });
    let stats = file_stats("x.rs", "x", &lexer);
    assert_eq!(stats.bytes, 2);
    assert_eq!(stats.counts[&Category::Whitespace], 1);
}

#[test]
fn commands_run_on_real_files() {
    let paths = vec![MAIN_RS.to_string(), MAIN_RS.to_string()];
    tokens_files(&paths[..1], &CliOptions::default()).unwrap();
    stats_files(&paths, &CliOptions::default()).unwrap();
}

#[test]
fn stats_fail_on_missing_file() {
    let paths = vec![MAIN_RS.to_string(), "missing.rs".to_string()];
    let err = stats_files(&paths, &CliOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::NotFound { .. }));
}

#[test]
fn stats_reject_token_display_flags() {
    let paths = vec![MAIN_RS.to_string()];
    for flag in ["--merge", "--json"] {
        let (options, _) = parse_options(&[flag.to_string()]).unwrap();
        let err = stats_files(&paths, &options).unwrap_err();
        assert!(
            matches!(&err, CliError::UnknownOption(name) if name == flag),
            "{flag}: {err}"
        );
    }
}

#[test]
fn info_lists_descriptor_and_modes() {
    let text = describe(&Lexer::new()).unwrap();
    assert!(text.contains(r#""name": "Rust""#), "{text}");
    assert!(text.contains("text/x-rust"));
    for mode in Mode::ALL {
        assert!(text.contains(mode.name()), "missing {mode}");
    }
    assert!(text.contains("function-name"));
    assert!(text.contains("(fallthrough)"));
}

#[test]
fn match_accepts_rust_files_only() {
    assert!(match_path("src/lib.rs").is_ok());
    assert!(match_path("crate.rc").is_ok());
    assert!(matches!(
        match_path("README.md"),
        Err(CliError::NotRustSource { .. })
    ));
}
