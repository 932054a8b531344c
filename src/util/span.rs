/// A 1-based line and column, as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column in characters, starting at 1.
    pub column: usize,
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Locates a byte offset in `source`.
///
/// Offsets past the end clamp to the end of the source, which is where the
/// end-of-input token lives.
///
/// # Example
/// ```
/// use reckon::util::span::{LineCol, line_col};
///
/// assert_eq!(line_col("1 +\n 2 )", 7), LineCol { line: 2, column: 4 });
/// ```
#[must_use]
pub fn line_col(source: &str, offset: usize) -> LineCol {
    let offset = clamp_to_boundary(source, offset);
    let before = &source[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);

    LineCol { line:   before.matches('\n').count() + 1,
              column: before[line_start..].chars().count() + 1, }
}

/// Returns the full line of `source` containing `offset`, without its line
/// terminator.
#[must_use]
pub fn line_at(source: &str, offset: usize) -> &str {
    let offset = clamp_to_boundary(source, offset);
    let start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);

    source[start..end].trim_end_matches('\r')
}

fn clamp_to_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
