// crates/core/src/lines.rs
use std::borrow::Cow;

/// Split one `\n`-terminated chunk into logical lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A chunk is what
/// `BufRead::read_until(b'\n', ..)` returns, so the only `\n` it can contain
/// is the trailing one; embedded `\r` still start new lines.
pub fn split_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let body = body.strip_suffix(b"\r").unwrap_or(body);
    body.split(|&b| b == b'\r')
}

/// Decode a line as UTF-8, substituting U+FFFD for invalid sequences.
#[must_use]
pub fn decode(line: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(line)
}
