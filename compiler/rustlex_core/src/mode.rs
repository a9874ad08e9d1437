//! Lexical modes and the mode stack.
//!
//! A mode names the rule list currently in force. Modes nest: entering a
//! string inside an attribute pushes `String` on top of `Attribute`, and the
//! closing quote pops back to exactly the attribute context.
//!
//! The stack always holds [`Mode::Root`] at the bottom. `pop()` refuses to
//! remove it, which makes stray closers (a `]` with no open attribute) a
//! no-op instead of a corruption.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A named lexical context.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Root = 0,
    String = 1,
    Character = 2,
    CommentBlock = 3,
    /// Attribute rules layered over the full root rules.
    Attribute = 4,
    /// One-shot: a namespace path after `use` / `import`.
    Import = 5,
    /// One-shot: the identifier after `fn`.
    FunctionName = 6,
    /// One-shot: the identifier after `const`.
    ConstName = 7,
    /// One-shot: the identifier after a type-introducing keyword.
    TypeName = 8,
    /// One-shot: the identifier or `<` after `impl`.
    ImplTarget = 9,
}

impl Mode {
    /// Number of modes; rule tables are indexed by `mode as usize`.
    pub const COUNT: usize = 10;

    pub const ALL: [Mode; Mode::COUNT] = [
        Mode::Root,
        Mode::String,
        Mode::Character,
        Mode::CommentBlock,
        Mode::Attribute,
        Mode::Import,
        Mode::FunctionName,
        Mode::ConstName,
        Mode::TypeName,
        Mode::ImplTarget,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kebab-case name (`"comment-block"`).
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::String => "string",
            Mode::Character => "character",
            Mode::CommentBlock => "comment-block",
            Mode::Attribute => "attribute",
            Mode::Import => "import",
            Mode::FunctionName => "function-name",
            Mode::ConstName => "const-name",
            Mode::TypeName => "type-name",
            Mode::ImplTarget => "impl-target",
        }
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        Mode::ALL.iter().copied().find(|mode| mode.name() == name)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack of active modes. Never empty; `Root` is never popped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeStack {
    frames: SmallVec<[Mode; 8]>,
}

impl ModeStack {
    /// A stack holding only `Root`.
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(Mode::Root);
        Self { frames }
    }

    /// A stack with `start` on top of `Root` (or just `Root`).
    pub fn starting_in(start: Mode) -> Self {
        let mut stack = Self::new();
        stack.push(start);
        stack
    }

    #[inline]
    pub fn top(&self) -> Mode {
        self.frames.last().copied().unwrap_or(Mode::Root)
    }

    /// Push `mode`. Pushing `Root` is ignored; root only lives at the bottom.
    pub fn push(&mut self, mode: Mode) {
        if mode != Mode::Root {
            self.frames.push(mode);
        }
    }

    /// Pop the top mode. Returns `None` when only `Root` remains.
    pub fn pop(&mut self) -> Option<Mode> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Replace the top mode. Replacing `Root` pushes instead.
    pub fn replace(&mut self, mode: Mode) {
        let _ = self.pop();
        self.push(mode);
    }

    /// Number of frames, including `Root`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.frames.len() == 1
    }

    /// Frames from bottom (`Root`) to top.
    pub fn as_slice(&self) -> &[Mode] {
        &self.frames
    }

    /// Pop every mode above `Root`, innermost first.
    pub fn close_all(&mut self) -> Vec<Mode> {
        let mut closed = Vec::with_capacity(self.frames.len() - 1);
        while let Some(mode) = self.pop() {
            closed.push(mode);
        }
        closed
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
