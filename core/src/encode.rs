//! RFC 3986 percent-encoding for query and form components.
//!
//! # Design
//! Both functions are total over `&str`: valid UTF-8 in, valid UTF-8 out,
//! no failure path. Multi-byte characters are encoded one byte at a time,
//! so the output is plain ASCII. Decoding is lenient — malformed escape
//! sequences pass through unchanged rather than erroring, which keeps the
//! round-trip property `decode(encode(s)) == s` for every input.

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// True for the RFC 3986 unreserved set: ALPHA / DIGIT / "-" / "." / "_" / "~".
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encode every byte outside the unreserved set as `%XX` (uppercase hex).
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX_UPPER[(byte >> 4) as usize] as char);
            out.push(HEX_UPPER[(byte & 0x0F) as usize] as char);
        }
    }
    out
}

/// Decode `%XX` escape sequences back into bytes.
///
/// A `%` that is not followed by two hex digits is copied through verbatim.
/// Decoded bytes that do not form valid UTF-8 are replaced lossily.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
