//! Percent-encoding codec (RFC 3986 §2.1).
//!
//! Encoding keeps unreserved characters and replaces every other byte with
//! an uppercase percent-triplet. Decoding is lenient: a `%` that does not
//! start a valid triplet is dropped and never reported as an error. Use
//! [`is_well_formed`] first when a strict contract is needed.

use std::borrow::Cow;

use tracing::{Level, event};

use crate::grammar::{HEXDIG, UNRESERVED};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-triplet for every byte value.
const ENCODE_TABLE: [[u8; 3]; 256] = build_encode_table();

const fn build_encode_table() -> [[u8; 3]; 256] {
    let mut table = [[0u8; 3]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = [b'%', HEX_UPPER[i >> 4], HEX_UPPER[i & 0xf]];
        i += 1;
    }
    table
}

fn push_triplet(out: &mut String, byte: u8) {
    for &b in &ENCODE_TABLE[usize::from(byte)] {
        out.push(char::from(b));
    }
}

/// Percent-encodes every byte that is not an unreserved character.
///
/// The output is always ASCII.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::pct;
///
/// assert_eq!(pct::encode(b"a b/c~"), "a%20b%2Fc~");
/// assert_eq!(pct::encode(&[0xff]), "%FF");
/// ```
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input {
        if UNRESERVED.allows(byte) {
            out.push(char::from(byte));
        } else {
            push_triplet(&mut out, byte);
        }
    }
    out
}

/// Percent-encodes only the non-ASCII bytes of `input`.
///
/// Returns the input unchanged when it is already ASCII.
#[must_use]
pub fn encode_non_ascii(input: &str) -> Cow<'_, str> {
    if input.is_ascii() {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        if byte.is_ascii() {
            out.push(char::from(byte));
        } else {
            push_triplet(&mut out, byte);
        }
    }
    Cow::Owned(out)
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Decodes percent-triplets in `input`.
///
/// Malformed triplets are handled leniently. When a `%` is not followed by two
/// hex digits, only the `%` itself is dropped. The characters after it are
/// kept and decoded as usual, so `"%zz"` yields `"zz"` and `"%4"` yields
/// `"4"`. All other characters are copied through unchanged. Use
/// [`is_well_formed`] first when malformed input should be rejected instead.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::pct;
///
/// assert_eq!(pct::decode("a%20b"), b"a b");
/// assert_eq!(pct::decode("100%"), b"100");
/// assert_eq!(pct::decode("%zz"), b"zz");
/// assert_eq!(pct::decode("%4"), b"4");
/// ```
#[must_use]
pub fn decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte != b'%' {
            out.push(byte);
            i += 1;
            continue;
        }

        let hi = bytes.get(i + 1).copied().and_then(hex_value);
        let lo = bytes.get(i + 2).copied().and_then(hex_value);
        if let (Some(hi), Some(lo)) = (hi, lo) {
            out.push((hi << 4) | lo);
            i += 3;
        } else {
            event!(
                Level::TRACE,
                message = "dropping malformed percent-triplet",
                position = i
            );
            i += 1;
        }
    }
    out
}

/// Decodes `input` and converts the result to UTF-8, replacing invalid
/// sequences with `U+FFFD`.
///
/// Borrows the input when it contains no `%`.
#[must_use]
pub fn decode_utf8_lossy(input: &str) -> Cow<'_, str> {
    if !input.contains('%') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(String::from_utf8_lossy(&decode(input)).into_owned())
}

/// Returns true if every `%` in `input` starts a valid percent-triplet.
#[must_use]
pub fn is_well_formed(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if HEXDIG.allows(*hi) && HEXDIG.allows(*lo)
            )
    })
}
