//! `stats`: per-category token counts across many files.
//!
//! Files are read and tokenized in parallel; the rule table is shared
//! read-only between workers.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rustlex_core::{Category, Lexer, Mode};
use tracing::debug;

use super::{read_file, CliOptions};
use crate::CliError;

/// Token statistics of one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileStats {
    pub path: String,
    pub bytes: usize,
    pub tokens: usize,
    pub counts: BTreeMap<Category, usize>,
    pub unterminated: Vec<Mode>,
}

impl FileStats {
    fn absorb(&mut self, other: &FileStats) {
        self.bytes += other.bytes;
        self.tokens += other.tokens;
        for (&category, &count) in &other.counts {
            *self.counts.entry(category).or_default() += count;
        }
    }
}

/// Count the tokens of `source` by category.
pub fn file_stats(path: &str, source: &str, lexer: &Lexer) -> FileStats {
    let prepared = lexer.prepare(source);
    let mut stats = FileStats {
        path: path.to_string(),
        bytes: prepared.len(),
        ..FileStats::default()
    };

    let mut stream = lexer.tokens(&prepared);
    for token in stream.by_ref() {
        stats.tokens += 1;
        *stats.counts.entry(token.category).or_default() += 1;
    }
    stats.unterminated = stream.unterminated().to_vec();
    stats
}

/// Print per-file and total statistics for `paths`.
///
/// Counts are always over raw tokens, so the token display flags are
/// rejected.
pub fn stats_files(paths: &[String], options: &CliOptions) -> Result<(), CliError> {
    if options.merge {
        return Err(CliError::UnknownOption("--merge".to_string()));
    }
    if options.json {
        return Err(CliError::UnknownOption("--json".to_string()));
    }
    let lexer = options.lexer();
    debug!(files = paths.len(), "collecting token statistics");

    let per_file = paths
        .par_iter()
        .map(|path| read_file(path).map(|content| file_stats(path, &content, &lexer)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut total = FileStats {
        path: "total".to_string(),
        ..FileStats::default()
    };
    for stats in &per_file {
        let open = if stats.unterminated.is_empty() {
            String::new()
        } else {
            let modes: Vec<_> = stats.unterminated.iter().map(|mode| mode.name()).collect();
            format!(" (unterminated: {})", modes.join(", "))
        };
        println!(
            "{}: {} tokens, {} bytes{open}",
            stats.path, stats.tokens, stats.bytes
        );
        total.absorb(stats);
    }

    println!();
    println!(
        "{} files, {} tokens, {} bytes",
        per_file.len(),
        total.tokens,
        total.bytes
    );
    for (category, count) in &total.counts {
        if options.only.is_none_or(|only| only == *category) {
            println!("  {:<28} {count:>8}", category.dotted_name());
        }
    }
    Ok(())
}
