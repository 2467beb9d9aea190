//! Permissive text decoding for input files.
//!
//! Every byte maps to the Unicode code point with the same value (ISO-8859-1),
//! so no input can fail to decode. The decoded text is later written as UTF-8,
//! which means bytes `0x80..=0xFF` grow to two bytes in the output.

/// Decodes `bytes` as Latin-1.
pub fn decode_latin1(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() + bytes.len() / 2);
    text.extend(bytes.iter().map(|&b| char::from(b)));
    text
}
