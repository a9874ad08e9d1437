//! Entry points.
//!
//! A [`Lexer`] pairs a rule table with [`LexerOptions`]. The builtin table
//! is compiled once per process on first use and shared by every lexer that
//! does not bring its own.

use std::borrow::Cow;

use once_cell::sync::Lazy;

use crate::{rules, LexerOptions, Mode, RuleTable, Tokens};

static BUILTIN: Lazy<RuleTable> = Lazy::new(compile_builtin);

#[allow(
    clippy::expect_used,
    reason = "the builtin rules are fixed; a failure is a bug caught by the rules tests"
)]
fn compile_builtin() -> RuleTable {
    rules::builtin().expect("builtin rule table should compile")
}

#[derive(Clone, Debug)]
enum TableSource {
    Builtin,
    Custom(Box<RuleTable>),
}

/// Tokenizer configured with a rule table and options.
///
/// Lexers are cheap to clone when using the builtin table and hold no
/// per-run state; every call to [`tokens()`](Self::tokens) starts fresh.
#[derive(Clone, Debug)]
pub struct Lexer {
    table: TableSource,
    options: LexerOptions,
}

impl Lexer {
    /// Lexer over the builtin rules with default options.
    pub fn new() -> Self {
        Self::with_options(LexerOptions::default())
    }

    pub fn with_options(options: LexerOptions) -> Self {
        Self {
            table: TableSource::Builtin,
            options,
        }
    }

    /// Lexer over a caller-built table, e.g. from an adjusted
    /// [`rules::builder()`].
    pub fn with_table(table: RuleTable, options: LexerOptions) -> Self {
        Self {
            table: TableSource::Custom(Box::new(table)),
            options,
        }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    pub fn table(&self) -> &RuleTable {
        match &self.table {
            TableSource::Builtin => &*BUILTIN,
            TableSource::Custom(table) => &**table,
        }
    }

    /// Apply the configured preprocessing to `source`.
    ///
    /// Pass the result to [`tokens()`](Self::tokens) when the options
    /// rewrite input; tokens then tile the prepared text.
    pub fn prepare<'a>(&self, source: &'a str) -> Cow<'a, str> {
        self.options.prepare(source)
    }

    /// Tokenize `source` as-is, starting in the configured start mode.
    ///
    /// No preprocessing is applied here; see [`prepare()`](Self::prepare).
    pub fn tokens<'a>(&'a self, source: &'a str) -> Tokens<'a> {
        self.tokens_from(source, self.options.start_mode)
    }

    /// Tokenize `source` with `start` on top of the root mode.
    #[tracing::instrument(level = "trace", skip_all, fields(len = source.len(), %start))]
    pub fn tokens_from<'a>(&'a self, source: &'a str, start: Mode) -> Tokens<'a> {
        Tokens::new(self.table(), source, start)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize `source` with the builtin rules, starting in root mode.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(&*BUILTIN, source, Mode::Root)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
