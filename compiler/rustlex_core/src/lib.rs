//! Mode-stacked rule-dispatch tokenizer for Rust syntax highlighting.
//!
//! The tokenizer splits source text into a contiguous sequence of
//! categorized tokens. It never fails: any input, including malformed or
//! truncated code, produces tokens that tile the input exactly, in order,
//! with no gaps or overlaps.
//!
//! # Architecture
//!
//! ```text
//! rules::builder() ──► RuleTableBuilder ──► RuleTable (per-mode rule lists)
//!                                               │
//! source ──► Lexer::tokens() ──► Tokens ◄───────┘
//!                                   │  match ► emit ► advance ► transition
//!                                   ▼
//!                               Token { category, text, offset }
//! ```
//!
//! Each [`Mode`] owns an ordered rule list. The first rule whose recognizer
//! matches a non-empty prefix of the remaining input wins. Its tokens are
//! emitted and its [`Transition`] adjusts the [`ModeStack`].
//!
//! # Usage
//!
//! ```text
//! for token in rustlex_core::tokenize("fn main() {}") {
//!     println!("{} {:?}", token.category, token.text);
//! }
//! ```
//!
//! # Concurrency
//!
//! A [`RuleTable`] is immutable once built and can be shared across threads.
//! Each [`Tokens`] stream carries its own cursor and mode stack.

mod category;
mod cursor;
mod descriptor;
mod error;
mod lexer;
mod mode;
mod options;
mod rule;
pub mod rules;
mod scanner;
mod table;
mod token;

pub use category::{Category, Group};
pub use descriptor::{LexerDescriptor, RUST};
pub use error::RuleError;
pub use lexer::{tokenize, Lexer};
pub use mode::{Mode, ModeStack};
pub use options::LexerOptions;
pub use rule::{is_ident_continue, Action, Matcher, Rule, Transition, WordSet};
pub use scanner::Tokens;
pub use table::{Entry, RuleTable, RuleTableBuilder};
pub use token::{merge_adjacent, MergeAdjacent, Token};
