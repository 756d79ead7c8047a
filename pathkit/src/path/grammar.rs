//! Boundary detection for the `root-name? root-directory? relative-path`
//! grammar.
//!
//! Every function here works on raw bytes and returns byte offsets into the
//! input. Separators and the other delimiters are ASCII, so each offset lands
//! on a UTF-8 character boundary of the original string.

use super::style::Style;

/// End of the root-name, or `0` when there is none.
///
/// Windows-style root-names, in priority order:
/// - a drive letter and colon (`C:`);
/// - a three byte device prefix: `\\?\`, `\\.\` or `\??\`;
/// - a UNC server (`\\server`) up to the next separator.
pub(crate) fn root_name_end(p: &[u8], style: Style) -> usize {
    if style == Style::Posix || p.len() < 2 {
        return 0;
    }
    let sep = |b: u8| style.is_separator(b);
    let len = p.len();

    if (p[0] | 0x20).is_ascii_lowercase() && p[1] == b':' {
        return 2;
    }
    if !sep(p[0]) {
        return 0;
    }
    if len >= 4
        && sep(p[3])
        && (len == 4 || !sep(p[4]))
        && ((sep(p[1]) && (p[2] == b'?' || p[2] == b'.')) || (p[1] == b'?' && p[2] == b'?'))
    {
        return 3;
    }
    if len >= 3 && sep(p[1]) && !sep(p[2]) {
        let mut i = 3;
        while i < len && !sep(p[i]) {
            i += 1;
        }
        return i;
    }
    0
}

/// End of the separator run that follows the root-name.
///
/// This is also where the relative path begins.
pub(crate) fn root_dir_end(p: &[u8], style: Style) -> usize {
    let mut i = root_name_end(p, style);
    while i < p.len() && style.is_separator(p[i]) {
        i += 1;
    }
    i
}

/// Start of the final component. Equal to `p.len()` when the path ends in a
/// separator or has no relative path.
pub(crate) fn filename_start(p: &[u8], style: Style) -> usize {
    let rel = root_dir_end(p, style);
    let mut i = p.len();
    while i > rel && !style.is_separator(p[i - 1]) {
        i -= 1;
    }
    i
}

/// End of the stem/extension region of the filename: the first `:` of an
/// alternate data stream on Windows, else the end of the path.
pub(crate) fn stream_start(p: &[u8], style: Style) -> usize {
    let start = filename_start(p, style);
    if style == Style::Windows {
        if let Some(colon) = p[start..].iter().position(|&b| b == b':') {
            return start + colon;
        }
    }
    p.len()
}

/// Start of the extension, including its leading dot. Equal to
/// [`stream_start`] when the filename has no extension.
pub(crate) fn extension_start(p: &[u8], style: Style) -> usize {
    let start = filename_start(p, style);
    let end = stream_start(p, style);
    let name = &p[start..end];
    if name == b"." || name == b".." {
        return end;
    }
    match name.iter().rposition(|&b| b == b'.') {
        Some(dot) if dot > 0 => start + dot,
        _ => end,
    }
}

/// End of the parent path: the filename and the separator run before it are
/// excluded, but the root is never cut into.
pub(crate) fn parent_end(p: &[u8], style: Style) -> usize {
    let rel = root_dir_end(p, style);
    let mut i = p.len();
    while i > rel && !style.is_separator(p[i - 1]) {
        i -= 1;
    }
    while i > rel && style.is_separator(p[i - 1]) {
        i -= 1;
    }
    i
}
