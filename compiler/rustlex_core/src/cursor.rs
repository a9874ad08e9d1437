//! Byte cursor over the source text.
//!
//! The cursor only ever moves forward, and only by whole UTF-8 characters:
//! every position it holds is a `char` boundary of the source, so slicing
//! `source[start..pos]` never panics. Rule matchers report byte lengths
//! measured on `rest()`, which is itself a boundary-aligned suffix.

/// Forward-only cursor over a `&str`.
///
/// The cursor is [`Copy`], so the scanner can snapshot it for free.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at byte 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Byte width of the character at the cursor (0 at EOF).
    #[inline]
    pub fn char_width(&self) -> usize {
        self.rest()
            .as_bytes()
            .first()
            .map_or(0, |&b| Self::utf8_char_width(b))
    }

    /// Advance by `n` bytes, clamped to the end of the source.
    ///
    /// # Contract
    ///
    /// `pos + n` must be a character boundary. Matchers guarantee this by
    /// measuring lengths on `rest()`.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(
            self.source.is_char_boundary((self.pos + n).min(self.source.len())),
            "advance_n({n}) from {} splits a character",
            self.pos
        );
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Advance past one full character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.char_width();
        self.advance_n(width);
    }

    /// Source substring `start..end`.
    ///
    /// Out-of-range or non-boundary spans yield `""` rather than panicking.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source.get(start..end).unwrap_or_default()
    }

    /// Source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
