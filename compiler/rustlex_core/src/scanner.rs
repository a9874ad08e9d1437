//! The scanner loop and the lazy token stream.
//!
//! [`Tokens`] drives the match-act-advance cycle one step at a time as the
//! consumer pulls tokens:
//!
//! 1. Take the rule list of the mode on top of the stack.
//! 2. Apply the first rule whose recognizer matches a non-empty prefix of the
//!    remaining input. Its tokens are queued and the cursor advances.
//! 3. Apply the rule's transition to the mode stack.
//!
//! When no rule matches, a fallthrough mode is popped without consuming
//! input (the parent mode retries at the same position); any other mode
//! emits the single character at the cursor as `Unclassified` and advances.
//!
//! # Termination
//!
//! Every consuming step advances by at least one character, and every
//! zero-width pop removes a frame that a consuming step pushed. The number
//! of steps is therefore at most twice the number of characters.
//!
//! # End of Input
//!
//! Modes still open at end of input (an unterminated string, comment or
//! attribute) are closed silently. Their content has already been emitted
//! under the in-progress category. The closed modes are kept for callers
//! that want to know ([`Tokens::unterminated()`]).

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::rule::Emitted;
use crate::{Category, Mode, ModeStack, RuleTable, Token, Transition};

/// Lazily produced token stream over one source text.
///
/// Dropping the stream early is always safe; no work happens in the
/// background.
pub struct Tokens<'a> {
    table: &'a RuleTable,
    cursor: Cursor<'a>,
    stack: ModeStack,
    /// Tokens produced by the last rule application, not yet yielded.
    pending: Emitted<'a>,
    pending_at: usize,
    unterminated: Vec<Mode>,
    steps: usize,
    finished: bool,
}

impl<'a> Tokens<'a> {
    /// Start scanning `source` with `start` on top of the root mode.
    pub fn new(table: &'a RuleTable, source: &'a str, start: Mode) -> Self {
        Self {
            table,
            cursor: Cursor::new(source),
            stack: ModeStack::starting_in(start),
            pending: Emitted::new(),
            pending_at: 0,
            unterminated: Vec::new(),
            steps: 0,
            finished: false,
        }
    }

    /// Current mode stack, bottom (`Root`) first.
    pub fn mode_stack(&self) -> &[Mode] {
        self.stack.as_slice()
    }

    /// Modes that were still open at end of input, innermost first.
    ///
    /// Fallthrough modes are left out. Empty until the stream is exhausted.
    pub fn unterminated(&self) -> &[Mode] {
        &self.unterminated
    }

    /// `true` once exhausted if every construct was closed by the input.
    pub fn is_balanced(&self) -> bool {
        self.finished && self.unterminated.is_empty()
    }

    /// Byte offset of the next unscanned character.
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Number of scanner steps taken so far (rule applications, fallback
    /// emissions and fallthrough pops).
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn step(&mut self) {
        self.steps += 1;
        let table = self.table;
        let mode = self.stack.top();
        let rest = self.cursor.rest();
        let offset = self.cursor.pos();

        for rule in table.rules(mode) {
            if let Some(len) = rule.apply(rest, offset, &mut self.pending) {
                self.cursor.advance_n(len);
                self.apply_transition(rule.transition());
                return;
            }
        }

        if table.is_fallthrough(mode) && !self.stack.is_root() {
            self.stack.pop();
            trace!(%mode, offset, "fallthrough pop");
            return;
        }

        let start = self.cursor.pos();
        self.cursor.advance_char();
        let text = self.cursor.slice_from(start);
        debug!(%mode, offset, ?text, "no rule matched");
        self.pending
            .push(Token::new(Category::Unclassified, text, start));
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Push(mode) => {
                self.stack.push(mode);
                trace!(%mode, depth = self.stack.depth(), "push");
            }
            Transition::Pop => {
                if let Some(mode) = self.stack.pop() {
                    trace!(%mode, depth = self.stack.depth(), "pop");
                }
            }
            Transition::Replace(mode) => {
                self.stack.replace(mode);
                trace!(%mode, depth = self.stack.depth(), "replace");
            }
        }
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        let table = self.table;
        self.unterminated = self.stack.close_all();
        // A pending one-shot name is an expectation, not an open construct.
        self.unterminated.retain(|&mode| !table.is_fallthrough(mode));
        if !self.unterminated.is_empty() {
            debug!(unterminated = ?self.unterminated, "closing modes open at end of input");
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(&token) = self.pending.get(self.pending_at) {
                self.pending_at += 1;
                return Some(token);
            }
            self.pending.clear();
            self.pending_at = 0;

            if self.cursor.is_eof() {
                self.finish();
                return None;
            }
            self.step();
        }
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
