use std::fmt::Write;

/// Decode process output as UTF-8, escaping invalid bytes as `\xNN`.
///
/// Never fails: malformed sequences end up in the text instead of being
/// dropped or replaced, so the original bytes stay recoverable.
pub fn decode_output(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        for byte in chunk.invalid() {
            let _ = write!(text, "\\x{:02x}", byte);
        }
    }
    text
}
