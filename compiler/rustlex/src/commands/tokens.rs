//! `tokens`: print the token stream of one or more files.

use rustlex_core::{merge_adjacent, Mode, Token};
use serde::Serialize;
use tracing::debug;

use super::{read_file, CliOptions};
use crate::CliError;

/// Rendered token lines of one source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenReport {
    pub lines: Vec<String>,
    /// Modes left open at end of input, innermost first.
    pub unterminated: Vec<Mode>,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    offset: usize,
    len: usize,
    category: &'static str,
    text: &'a str,
}

fn text_line(token: &Token<'_>) -> String {
    format!(
        "{:>6} {:<28} {:?}",
        token.offset,
        token.category.dotted_name(),
        token.text
    )
}

/// Tokenize `source` (after preprocessing) and render one line per token.
pub fn render_tokens(source: &str, options: &CliOptions) -> Result<TokenReport, CliError> {
    let lexer = options.lexer();
    let prepared = lexer.prepare(source);

    let mut stream = lexer.tokens(&prepared);
    let raw: Vec<Token<'_>> = stream.by_ref().collect();
    let unterminated = stream.unterminated().to_vec();

    let tokens: Vec<Token<'_>> = if options.merge {
        merge_adjacent(&prepared, raw).collect()
    } else {
        raw
    };

    let mut lines = Vec::with_capacity(tokens.len());
    for token in tokens
        .iter()
        .filter(|t| options.only.is_none_or(|only| t.category == only))
    {
        if options.json {
            lines.push(serde_json::to_string(&TokenRecord {
                offset: token.offset,
                len: token.len(),
                category: token.category.dotted_name(),
                text: token.text,
            })?);
        } else {
            lines.push(text_line(token));
        }
    }

    Ok(TokenReport {
        lines,
        unterminated,
    })
}

/// Print the tokens of every file in `paths`.
pub fn tokens_files(paths: &[String], options: &CliOptions) -> Result<(), CliError> {
    for path in paths {
        let content = read_file(path)?;
        debug!(path = %path, bytes = content.len(), "tokenizing");
        let report = render_tokens(&content, options)?;

        if !options.json {
            println!("Tokens for '{}' ({} tokens):", path, report.lines.len());
        }
        for line in &report.lines {
            println!("{line}");
        }
        if !report.unterminated.is_empty() {
            let modes: Vec<_> = report.unterminated.iter().map(|mode| mode.name()).collect();
            eprintln!("warning: '{path}' ends inside {}", modes.join(", "));
        }
    }
    Ok(())
}
