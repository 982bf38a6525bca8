//! Printable previews of decoded bytes

/// Number of leading bytes shown when a buffer fails the signature check
pub const PREVIEW_LEN: usize = 10;

/// Escaped byte-string rendering of the first `max_len` bytes, e.g. `b"hello"`
///
/// Non-printable bytes appear as `\xNN` escapes so the preview can be pasted
/// back into source as a byte literal.
pub fn debug_bytes(data: &[u8], max_len: usize) -> String {
    let preview_len = data.len().min(max_len);
    format!("b\"{}\"", data[..preview_len].escape_ascii())
}

/// Space-separated uppercase hex of the first `max_len` bytes
pub fn hex_bytes(data: &[u8], max_len: usize) -> String {
    let preview_len = data.len().min(max_len);
    data[..preview_len]
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert bytes to ASCII preview with non-printable characters as dots
pub fn to_ascii_preview(data: &[u8], max_len: usize) -> String {
    let preview_len = data.len().min(max_len);
    let preview: String = data[..preview_len].iter().map(|&b| printable(b)).collect();

    if data.len() > max_len {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Hex dump lines (offset, 16 hex bytes, ASCII column) with indentation
pub fn hex_dump(data: &[u8], indent: usize) -> Vec<String> {
    let indent_str = " ".repeat(indent);
    data.chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let ascii: String = chunk.iter().map(|&b| printable(b)).collect();
            let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
            format!("{}{:04x}: {:47}  {}", indent_str, i * 16, hex.join(" "), ascii)
        })
        .collect()
}

fn printable(b: u8) -> char {
    if b.is_ascii_graphic() || b == b' ' {
        b as char
    } else {
        '.'
    }
}
