//! `info`: describe the tokenizer and its rule table.

use rustlex_core::{Lexer, Mode, RUST};

use crate::CliError;

/// Descriptor as JSON followed by the rule count of every mode.
pub fn describe(lexer: &Lexer) -> Result<String, CliError> {
    let mut out = serde_json::to_string_pretty(&RUST)?;
    out.push_str("\n\nModes:\n");

    let table = lexer.table();
    for mode in Mode::ALL {
        let suffix = if table.is_fallthrough(mode) {
            " (fallthrough)"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<14} {:>3} rules{suffix}\n",
            mode.name(),
            table.rules(mode).len()
        ));
    }
    out.push_str(&format!("  {:<14} {:>3} rules\n", "total", table.rule_count()));
    Ok(out)
}

pub fn print_info() -> Result<(), CliError> {
    print!("{}", describe(&Lexer::new())?);
    Ok(())
}
