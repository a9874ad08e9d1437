//! Command handlers for the `rustlex` CLI.
//!
//! Each submodule implements one command. Shared utilities like
//! [`read_file`] and option parsing live here in the module root.

use rustlex_core::{Category, Lexer, LexerOptions, Mode};

use crate::CliError;

mod info;
mod matching;
mod stats;
mod tokens;

pub use info::{describe, print_info};
pub use matching::match_path;
pub use stats::{file_stats, stats_files, FileStats};
pub use tokens::{render_tokens, tokens_files, TokenReport};

/// Options shared by the tokenizing commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub lexer: LexerOptions,
    /// Print only tokens of this category.
    pub only: Option<Category>,
    /// Coalesce adjacent tokens of the same category.
    pub merge: bool,
    /// One JSON object per token instead of aligned text.
    pub json: bool,
}

impl CliOptions {
    pub fn lexer(&self) -> Lexer {
        Lexer::with_options(self.lexer.clone())
    }
}

/// Split command arguments into options and positional paths.
///
/// Options use the `--flag` or `--flag=value` form; anything not starting
/// with `-` is a path.
pub fn parse_options(args: &[String]) -> Result<(CliOptions, Vec<String>), CliError> {
    let mut options = CliOptions::default();
    let mut paths = Vec::new();

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--start=") {
            options.lexer.start_mode =
                Mode::from_name(mode).ok_or_else(|| CliError::UnknownMode(mode.to_string()))?;
        } else if let Some(name) = arg.strip_prefix("--only=") {
            options.only = Some(
                Category::from_dotted_name(name)
                    .ok_or_else(|| CliError::UnknownCategory(name.to_string()))?,
            );
        } else if let Some(size) = arg.strip_prefix("--tab-size=") {
            options.lexer.tab_size = size
                .parse()
                .map_err(|_| CliError::InvalidTabSize(size.to_string()))?;
        } else if arg == "--merge" {
            options.merge = true;
        } else if arg == "--json" {
            options.json = true;
        } else if arg == "--ensure-nl" {
            options.lexer.ensure_nl = true;
        } else if arg == "--strip-nl" {
            options.lexer.strip_nl = true;
        } else if arg == "--strip-all" {
            options.lexer.strip_all = true;
        } else if arg == "--normalize-nl" {
            options.lexer.normalize_newlines = true;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            paths.push(arg.clone());
        }
    }

    Ok((options, paths))
}

/// Read a source file, mapping I/O failures to user-facing errors.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::NotFound {
            path: path.to_string(),
        },
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_string(),
        },
        std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 {
            path: path.to_string(),
        },
        _ => CliError::Io {
            path: path.to_string(),
            source: e,
        },
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
