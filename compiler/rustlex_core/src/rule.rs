//! Rules: a recognizer paired with an action.
//!
//! A [`Rule`] tests a prefix of the unconsumed input with its [`Matcher`],
//! emits one or more tokens over the matched span according to its
//! [`Action`], and optionally changes the mode stack via its
//! [`Transition`]. Rules never match the empty string; a recognizer that
//! could only match zero bytes at the cursor reports no match.
//!
//! # Matchers
//!
//! - [`Matcher::Literal`]: exact prefix (`"<->"`).
//! - [`Matcher::Words`]: enumerated word list with identifier-boundary
//!   semantics. The maximal identifier run at the cursor must equal one of
//!   the words, so `fna` never matches `fn`.
//! - [`Matcher::Pattern`]: regular expression anchored at the cursor.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::{Category, Mode, RuleError, Token};

/// Tokens emitted by a single rule application.
pub(crate) type Emitted<'src> = SmallVec<[Token<'src>; 4]>;

/// Run of identifier-continue characters, the same class the identifier
/// rule uses after its first character.
static IDENT_RUN: Lazy<Regex> = Lazy::new(compile_ident_run);

#[allow(clippy::expect_used, reason = "the pattern is a fixed literal")]
fn compile_ident_run() -> Regex {
    Regex::new(r"\A\p{XID_Continue}*").expect("identifier run pattern should compile")
}

/// Returns `true` if `c` can continue an identifier (`\p{XID_Continue}`).
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    let mut buf = [0u8; 4];
    ident_run_len(c.encode_utf8(&mut buf)) > 0
}

/// Byte length of the identifier run at the start of `text`.
#[inline]
pub(crate) fn ident_run_len(text: &str) -> usize {
    IDENT_RUN.find(text).map_or(0, |m| m.end())
}

/// A set of words matched on identifier boundaries.
#[derive(Clone, Debug)]
pub struct WordSet {
    words: FxHashSet<Box<str>>,
    /// Length of the longest word; longer runs are rejected without hashing.
    max_len: usize,
}

impl WordSet {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, RuleError> {
        if words.is_empty() {
            return Err(RuleError::EmptyWordList);
        }
        let words: FxHashSet<Box<str>> = words.iter().map(|w| Box::from(w.as_ref())).collect();
        let max_len = words.iter().map(|w| w.len()).max().unwrap_or(0);
        Ok(Self { words, max_len })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn match_len(&self, rest: &str) -> Option<usize> {
        let run = ident_run_len(rest);
        if run == 0 || run > self.max_len {
            return None;
        }
        self.words.contains(&rest[..run]).then_some(run)
    }
}

/// Prefix recognizer.
#[derive(Clone, Debug)]
pub enum Matcher {
    Literal(Box<str>),
    Words(WordSet),
    /// Compiled as `\A(?:...)`.
    Pattern(Regex),
}

impl Matcher {
    /// Byte length of the non-empty prefix of `rest` this matcher accepts.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let len = match self {
            Matcher::Literal(text) => rest.starts_with(&**text).then_some(text.len())?,
            Matcher::Words(words) => words.match_len(rest)?,
            Matcher::Pattern(re) => re.find(rest)?.end(),
        };
        (len > 0).then_some(len)
    }
}

/// How the matched span is classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// One token over the whole match.
    Emit(Category),
    /// One token per capture group. Only built for pattern matchers.
    ByGroups(Box<[Category]>),
}

/// Mode stack change applied after the tokens are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    None,
    Push(Mode),
    Pop,
    Replace(Mode),
}

/// A recognizer/action pair.
#[derive(Clone, Debug)]
pub struct Rule {
    matcher: Matcher,
    action: Action,
    transition: Transition,
}

fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_owned(),
        source: Box::new(source),
    })
}

impl Rule {
    /// Exact prefix `text` classified as `category`.
    pub fn literal(text: &str, category: Category) -> Result<Self, RuleError> {
        if text.is_empty() {
            return Err(RuleError::EmptyLiteral);
        }
        Ok(Self::with(Matcher::Literal(Box::from(text)), Action::Emit(category)))
    }

    /// Any of `words` on an identifier boundary, classified as `category`.
    pub fn words<S: AsRef<str>>(words: &[S], category: Category) -> Result<Self, RuleError> {
        Ok(Self::with(
            Matcher::Words(WordSet::new(words)?),
            Action::Emit(category),
        ))
    }

    /// Regular expression classified as `category` over its whole match.
    pub fn pattern(pattern: &str, category: Category) -> Result<Self, RuleError> {
        Ok(Self::with(
            Matcher::Pattern(compile(pattern)?),
            Action::Emit(category),
        ))
    }

    /// Regular expression with one category per capture group.
    pub fn groups(pattern: &str, categories: &[Category]) -> Result<Self, RuleError> {
        let re = compile(pattern)?;
        let groups = re.captures_len() - 1;
        if groups != categories.len() {
            return Err(RuleError::GroupMismatch {
                pattern: pattern.to_owned(),
                groups,
                categories: categories.len(),
            });
        }
        Ok(Self::with(
            Matcher::Pattern(re),
            Action::ByGroups(categories.into()),
        ))
    }

    fn with(matcher: Matcher, action: Action) -> Self {
        Self {
            matcher,
            action,
            transition: Transition::None,
        }
    }

    #[must_use]
    pub fn push(self, mode: Mode) -> Self {
        self.then(Transition::Push(mode))
    }

    #[must_use]
    pub fn pop(self) -> Self {
        self.then(Transition::Pop)
    }

    #[must_use]
    pub fn replace(self, mode: Mode) -> Self {
        self.then(Transition::Replace(mode))
    }

    #[must_use]
    pub fn then(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Try this rule at the start of `rest` (which begins at byte `offset`
    /// of the source). On a match, pushes the classified tokens to `out`
    /// and returns the number of bytes consumed.
    ///
    /// Emitted tokens always tile `rest[..len]` exactly: empty groups are
    /// skipped and any text between groups is emitted as `Unclassified`.
    pub(crate) fn apply<'src>(
        &self,
        rest: &'src str,
        offset: usize,
        out: &mut Emitted<'src>,
    ) -> Option<usize> {
        let (Matcher::Pattern(re), Action::ByGroups(categories)) = (&self.matcher, &self.action)
        else {
            let len = self.matcher.match_len(rest)?;
            let category = match &self.action {
                Action::Emit(category) => *category,
                Action::ByGroups(categories) => {
                    categories.first().copied().unwrap_or(Category::Unclassified)
                }
            };
            out.push(Token::new(category, &rest[..len], offset));
            return Some(len);
        };

        let captures = re.captures(rest)?;
        let whole = captures.get(0)?;
        if whole.end() == 0 {
            return None;
        }

        let mut at = 0;
        for (i, &category) in categories.iter().enumerate() {
            let Some(group) = captures.get(i + 1) else {
                continue;
            };
            // Empty groups and groups nested inside an earlier one emit nothing.
            if group.is_empty() || group.start() < at {
                continue;
            }
            if group.start() > at {
                out.push(Token::new(
                    Category::Unclassified,
                    &rest[at..group.start()],
                    offset + at,
                ));
            }
            out.push(Token::new(category, group.as_str(), offset + group.start()));
            at = group.end();
        }
        if at < whole.end() {
            out.push(Token::new(
                Category::Unclassified,
                &rest[at..whole.end()],
                offset + at,
            ));
        }
        Some(whole.end())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
