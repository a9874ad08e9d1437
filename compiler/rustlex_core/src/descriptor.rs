//! Identifying metadata for the tokenizer.
//!
//! A [`LexerDescriptor`] is a plain value that an external registry can use
//! to select this tokenizer by language name, alias or filename. The core
//! does not keep a registry of its own.

use std::path::Path;

use serde::Serialize;

/// Name, aliases and filename patterns under which a tokenizer registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LexerDescriptor {
    /// Human-readable language name.
    pub name: &'static str,
    /// Lowercase identifiers accepted on explicit request.
    pub aliases: &'static [&'static str],
    /// Glob patterns matched against file names (`*` and `?` wildcards).
    pub filenames: &'static [&'static str],
    pub mime_types: &'static [&'static str],
}

/// Descriptor of the Rust tokenizer.
pub const RUST: LexerDescriptor = LexerDescriptor {
    name: "Rust",
    aliases: &["rust"],
    filenames: &["*.rs", "*.rc"],
    mime_types: &["text/x-rust"],
};

impl LexerDescriptor {
    /// `true` if `alias` names this tokenizer (case-insensitive; the
    /// language name itself also counts).
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.name.eq_ignore_ascii_case(alias)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    /// `true` if the final component of `path` matches a filename pattern.
    pub fn matches_filename(&self, path: impl AsRef<Path>) -> bool {
        let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames
            .iter()
            .any(|pattern| glob_match(pattern, name))
    }
}

/// Match `name` against a glob with `*` (any run) and `?` (one character).
fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    // Position after the last `*` and the name position it was tried at.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p + 1, n));
                p += 1;
            }
            Some(&c) if c == '?' || c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match backtrack {
                Some((after_star, tried)) => {
                    p = after_star;
                    n = tried + 1;
                    backtrack = Some((after_star, tried + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
