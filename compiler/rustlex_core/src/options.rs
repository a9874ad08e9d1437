//! Lexer options.
//!
//! Options describe input preprocessing that highlighters commonly expect
//! (newline stripping, tab expansion, trailing newline). Defaults leave the
//! input untouched, so tokens tile the caller's original text. When any
//! preprocessing is enabled, tokens tile the text returned by
//! [`LexerOptions::prepare()`] instead.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Mode;

/// Configuration for a [`Lexer`](crate::Lexer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerOptions {
    /// Strip leading and trailing newlines.
    pub strip_nl: bool,
    /// Strip all leading and trailing whitespace. Implies `strip_nl`.
    pub strip_all: bool,
    /// Make sure the input ends with a newline.
    pub ensure_nl: bool,
    /// Rewrite `\r\n` and lone `\r` as `\n`.
    pub normalize_newlines: bool,
    /// Expand tabs to this many columns. `0` leaves tabs alone.
    pub tab_size: usize,
    /// Mode on top of root when a run starts.
    pub start_mode: Mode,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            strip_nl: false,
            strip_all: false,
            ensure_nl: false,
            normalize_newlines: false,
            tab_size: 0,
            start_mode: Mode::Root,
        }
    }
}

impl LexerOptions {
    /// `true` if [`prepare()`](Self::prepare) can change the input.
    pub fn rewrites_input(&self) -> bool {
        self.strip_nl
            || self.strip_all
            || self.ensure_nl
            || self.normalize_newlines
            || self.tab_size > 0
    }

    /// Apply the configured preprocessing.
    ///
    /// Steps run in a fixed order: newline normalization, stripping, tab
    /// expansion, then the trailing newline.
    pub fn prepare<'a>(&self, source: &'a str) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(source);

        if self.normalize_newlines && text.contains('\r') {
            text = Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"));
        }

        if self.strip_all {
            text = trim_cow(text, |t| t.trim());
        } else if self.strip_nl {
            text = trim_cow(text, |t| t.trim_matches(|c| c == '\n' || c == '\r'));
        }

        if self.tab_size > 0 && text.contains('\t') {
            text = Cow::Owned(expand_tabs(&text, self.tab_size));
        }

        if self.ensure_nl && !text.ends_with('\n') {
            text.to_mut().push('\n');
        }

        text
    }
}

fn trim_cow<'a>(text: Cow<'a, str>, trim: impl Fn(&str) -> &str) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(t) => Cow::Borrowed(trim(t)),
        Cow::Owned(t) => Cow::Owned(trim(&t).to_owned()),
    }
}

/// Expand tabs to the next multiple of `tab_size` columns.
fn expand_tabs(text: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = tab_size - column % tab_size;
                out.push_str(&" ".repeat(spaces));
                column += spaces;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
