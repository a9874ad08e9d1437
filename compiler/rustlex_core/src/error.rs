//! Rule table construction errors.
//!
//! Tokenization itself never fails. The only fallible step is building a
//! [`RuleTable`](crate::RuleTable) from a rule description, where a bad
//! pattern or a dangling include is a programming error in the rule set.

use thiserror::Error;

use crate::Mode;

/// Why a rule table could not be built.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("pattern `{pattern}` has {groups} capture groups but {categories} categories")]
    GroupMismatch {
        pattern: String,
        groups: usize,
        categories: usize,
    },

    #[error("literal matcher must not be empty")]
    EmptyLiteral,

    #[error("word matcher needs at least one word")]
    EmptyWordList,

    #[error("unknown rule set `{0}`")]
    UnknownSet(String),

    #[error("rule set `{0}` includes itself")]
    IncludeCycle(String),

    #[error("no rules defined for mode `{0}`")]
    MissingMode(Mode),
}
