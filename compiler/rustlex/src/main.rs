//! rustlex CLI
//!
//! Tokenizes Rust source for syntax highlighting.

use std::error::Error as _;

use rustlex::commands::{match_path, parse_options, print_info, stats_files, tokens_files};
use rustlex::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "tokens" | "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: rustlex tokens <file.rs>... [options]");
                std::process::exit(1);
            }
            parse_options(&args[2..]).and_then(|(options, paths)| {
                if paths.is_empty() {
                    eprintln!("error: missing file path");
                    std::process::exit(1);
                }
                tokens_files(&paths, &options)
            })
        }
        "stats" => {
            if args.len() < 3 {
                eprintln!("Usage: rustlex stats <file.rs>... [options]");
                std::process::exit(1);
            }
            parse_options(&args[2..]).and_then(|(options, paths)| stats_files(&paths, &options))
        }
        "info" => print_info(),
        "match" => {
            if args.len() < 3 {
                eprintln!("Usage: rustlex match <path>");
                std::process::exit(1);
            }
            match_path(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("rustlex {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}

fn report(error: &CliError) {
    eprintln!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn print_usage() {
    println!("rustlex - Rust tokenizer for syntax highlighting");
    println!();
    println!("Usage: rustlex <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <files...>    Print the token stream of each file");
    println!("  stats <files...>     Count tokens by category (files run in parallel)");
    println!("  info                 Show the tokenizer descriptor and rule counts");
    println!("  match <path>         Exit 0 if the tokenizer claims this file name");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --start=<mode>      Start in a mode (root, string, comment-block, ...)");
    println!("  --only=<category>   Only show one category (e.g. Name.Function)");
    println!("  --merge             Merge adjacent tokens of the same category (tokens only)");
    println!("  --json              One JSON object per token (tokens only)");
    println!("  --ensure-nl         Append a trailing newline if missing");
    println!("  --strip-nl          Strip leading and trailing newlines");
    println!("  --strip-all         Strip leading and trailing whitespace");
    println!("  --normalize-nl      Convert \\r\\n and \\r to \\n");
    println!("  --tab-size=<n>      Expand tabs to n columns");
    println!();
    println!("Examples:");
    println!("  rustlex tokens main.rs");
    println!("  rustlex tokens main.rs --only=Name.Function");
    println!("  rustlex tokens snippet.rs --start=comment-block --merge");
    println!("  rustlex stats src/*.rs");
    println!("  RUST_LOG=rustlex_core=trace rustlex tokens main.rs");
}
