//! Byte ranges into source text.

use std::fmt;
use std::ops::Range;

/// A half-open byte range `start..end` into some source string.
///
/// Stored as `u32` pairs to keep [`Span`] at 8 bytes; inputs larger than
/// 4 GiB are not supported.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

crate::static_assert_size!(Span, 8);

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from a `usize` range.
    #[inline]
    pub fn from_range(range: Range<usize>) -> Self {
        Span::new(range.start as u32, range.end as u32)
    }

    #[inline]
    pub const fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Slice `source` with this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or not on a char boundary.
    #[inline]
    #[track_caller]
    pub fn slice(self, source: &str) -> &str {
        &source[self.to_range()]
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
