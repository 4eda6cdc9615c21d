//! Conversion of raw character offsets into line/column coordinates.

/// A position within a source text, produced by [`locate`].
///
/// Both fields are 0-indexed. Display layers add 1 where a human-facing
/// number is needed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Location {
    /// The 0-indexed line containing the offset.
    pub line: usize,
    /// The 0-indexed character column within that line.
    pub column: usize,
}

/// Resolves a raw character offset into a [`Location`] within `text`.
///
/// Offsets count Unicode scalar values from the start of the text, newlines
/// included. The line is the number of `'\n'` characters before the offset;
/// the column is the number of characters since the most recent newline.
///
/// An offset past the end of the text clamps to the last line and the last
/// column on it rather than failing. Runs in time proportional to the offset,
/// not the full text.
pub fn locate(offset: usize, text: &str) -> Location {
    let mut line = 0;
    let mut column = 0;
    for (i, ch) in text.chars().enumerate() {
        if i == offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    Location { line, column }
}
