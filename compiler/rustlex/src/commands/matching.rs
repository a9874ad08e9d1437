//! `match`: does the tokenizer claim a file name.

use rustlex_core::RUST;

use crate::CliError;

/// Print the tokenizer alias if `path` matches its filename patterns.
pub fn match_path(path: &str) -> Result<(), CliError> {
    if RUST.matches_filename(path) {
        println!("{}", RUST.aliases.first().copied().unwrap_or(RUST.name));
        Ok(())
    } else {
        Err(CliError::NotRustSource {
            path: path.to_string(),
        })
    }
}
