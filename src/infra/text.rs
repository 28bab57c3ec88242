//! Line/column <-> byte offset conversion
//!
//! Lines and columns are 1-indexed; columns count characters, offsets count
//! bytes.

/// Byte offset of `line:column` in `source`.
///
/// A column one past the last character of a line addresses the line end.
pub fn offset_at(source: &str, line: u32, column: u32) -> Option<usize> {
    if line == 0 || column == 0 {
        return None;
    }

    let mut line_start = 0;
    for _ in 1..line {
        let newline = source[line_start..].find('\n')?;
        line_start += newline + 1;
    }

    let line_text = source[line_start..]
        .split_once('\n')
        .map(|(l, _)| l)
        .unwrap_or(&source[line_start..]);
    let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);

    let target = (column - 1) as usize;
    let mut chars = line_text.char_indices();
    match chars.nth(target) {
        Some((byte, _)) => Some(line_start + byte),
        None if line_text.chars().count() == target => Some(line_start + line_text.len()),
        None => None,
    }
}

/// 1-indexed `(line, column)` of a byte offset in `source`.
pub fn line_column_at(source: &str, offset: usize) -> Option<(u32, u32)> {
    if offset > source.len() || !source.is_char_boundary(offset) {
        return None;
    }

    let before = &source[..offset];
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = source[line_start..offset].chars().count() as u32 + 1;
    Some((line, column))
}
