//! Command-line front end for `rustlex_core`.
//!
//! The binary is a thin collaborator around the tokenizer: it reads files,
//! selects the tokenizer through its descriptor and prints the token
//! stream. Command handlers live in [`commands`] so integration tests can
//! drive them without spawning a process.

use std::sync::Once;

use thiserror::Error;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber for diagnostics.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rustlex_core=debug` or `RUST_LOG=rustlex_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown mode '{0}' (expected e.g. root, string, comment-block)")]
    UnknownMode(String),

    #[error("unknown category '{0}' (expected a dotted name such as Name.Function)")]
    UnknownCategory(String),

    #[error("invalid tab size '{0}'")]
    InvalidTabSize(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("'{path}' is not a Rust source file")]
    NotRustSource { path: String },

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
