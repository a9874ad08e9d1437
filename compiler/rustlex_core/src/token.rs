//! Emitted token records and stream adaptors.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::Category;

/// A classified, non-overlapping span of the input.
///
/// Tokens borrow their text from the tokenized source. Offsets and lengths
/// are UTF-8 byte positions into that source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Classification label.
    pub category: Category,
    /// Raw text of the span.
    pub text: &'src str,
    /// Byte offset of the first byte of `text` in the source.
    pub offset: usize,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(category: Category, text: &'src str, offset: usize) -> Self {
        Self {
            category,
            text,
            offset,
        }
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false` for scanner output; every emitted token is non-empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the last byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// Coalesce runs of adjacent same-category tokens into one token.
///
/// The source text is needed to re-slice the merged span. Coverage is
/// preserved: the merged stream still concatenates to the input.
pub fn merge_adjacent<'src, I>(source: &'src str, tokens: I) -> MergeAdjacent<'src, I::IntoIter>
where
    I: IntoIterator<Item = Token<'src>>,
{
    MergeAdjacent {
        source,
        inner: tokens.into_iter(),
        held: None,
    }
}

/// Iterator returned by [`merge_adjacent`].
pub struct MergeAdjacent<'src, I> {
    source: &'src str,
    inner: I,
    held: Option<Token<'src>>,
}

impl<'src, I> Iterator for MergeAdjacent<'src, I>
where
    I: Iterator<Item = Token<'src>>,
{
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let mut current = self.held.take().or_else(|| self.inner.next())?;
        for next in self.inner.by_ref() {
            if next.category == current.category && next.offset == current.end() {
                let end = next.end();
                match self.source.get(current.offset..end) {
                    Some(text) => current.text = text,
                    None => {
                        self.held = Some(next);
                        return Some(current);
                    }
                }
            } else {
                self.held = Some(next);
                return Some(current);
            }
        }
        Some(current)
    }
}

impl<'src, I> FusedIterator for MergeAdjacent<'src, I> where I: FusedIterator<Item = Token<'src>> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
