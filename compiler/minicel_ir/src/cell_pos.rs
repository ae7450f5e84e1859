//! Table coordinates.

use std::fmt;

/// Number of addressable columns (`A..=Z`).
const COLUMN_LETTERS: usize = 26;

/// A 0-based `(row, col)` coordinate in a table.
///
/// Cell names are a single uppercase column letter followed by the row index
/// written verbatim: `A0` is the top-left cell, `B3` is row 3, column 1.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        CellPos { row, col }
    }

    /// Parse a cell name such as `B3`.
    ///
    /// Returns `None` unless the name is exactly one uppercase ASCII letter
    /// followed by a base-10 row index. Two-letter columns (`AA1`) are
    /// rejected rather than wrapped.
    pub fn from_name(name: &str) -> Option<Self> {
        let (&letter, digits) = name.as_bytes().split_first()?;
        if !letter.is_ascii_uppercase() {
            return None;
        }
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        // All-ASCII past the first byte, so slicing at 1 is a char boundary.
        let row = name[1..].parse::<usize>().ok()?;
        Some(CellPos::new(row, usize::from(letter - b'A')))
    }

    /// The column letter, if the column is addressable by name.
    pub fn column_letter(self) -> Option<char> {
        if self.col < COLUMN_LETTERS {
            Some(char::from(b'A' + self.col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column_letter() {
            Some(letter) => write!(f, "{letter}{}", self.row),
            None => write!(f, "R{}C{}", self.row, self.col),
        }
    }
}

impl fmt::Debug for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellPos({self})")
    }
}
