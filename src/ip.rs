//! IP address productions from RFC 3986 §3.2.2.
//!
//! ```abnf
//! IP-literal  = "[" ( IPv6address / IPvFuture  ) "]"
//! IPvFuture   = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
//! IPv6address =                            6( h16 ":" ) ls32
//!             /                       "::" 5( h16 ":" ) ls32
//!             / [               h16 ] "::" 4( h16 ":" ) ls32
//!             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
//!             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
//!             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
//!             / [ *4( h16 ":" ) h16 ] "::"              ls32
//!             / [ *5( h16 ":" ) h16 ] "::"              h16
//!             / [ *6( h16 ":" ) h16 ] "::"
//! h16         = 1*4HEXDIG
//! ls32        = ( h16 ":" h16 ) / IPv4address
//! IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet
//! dec-octet   = DIGIT / %x31-39 DIGIT / "1" 2DIGIT / "2" %x30-34 DIGIT / "25" %x30-35
//! ```
//!
//! The nine `IPv6address` alternatives collapse to one rule: without `::`
//! the address holds exactly eight 16-bit pieces; with a single `::` the
//! pieces on both sides add up to at most seven. An `IPv4address` may only
//! appear last and counts as two pieces.

use crate::grammar::{self, HEXDIG, IPVFUTURE};

/// Number of 16-bit pieces in an uncompressed IPv6 address.
const IPV6_PIECES: usize = 8;

/// `dec-octet`: a decimal number 0-255 without leading zeros.
///
/// ```
/// use rfc3986_uri::ip::dec_octet;
///
/// assert!(dec_octet("0"));
/// assert!(dec_octet("255"));
/// assert!(!dec_octet("256"));
/// assert!(!dec_octet("01"));
/// ```
#[must_use]
pub fn dec_octet(s: &str) -> bool {
    match s.as_bytes() {
        [d] => d.is_ascii_digit(),
        [b'1'..=b'9', d] => d.is_ascii_digit(),
        [b'1', d1, d2] => d1.is_ascii_digit() && d2.is_ascii_digit(),
        [b'2', b'0'..=b'4', d] => d.is_ascii_digit(),
        [b'2', b'5', b'0'..=b'5'] => true,
        _ => false,
    }
}

/// `IPv4address`
#[must_use]
pub fn ipv4_address(s: &str) -> bool {
    let mut octets = 0;
    for part in s.split('.') {
        octets += 1;
        if octets > 4 || !dec_octet(part) {
            return false;
        }
    }
    octets == 4
}

/// `h16`: one to four hex digits.
#[must_use]
pub fn h16(s: &str) -> bool {
    (1..=4).contains(&s.len()) && grammar::matches(HEXDIG, s)
}

/// `ls32`: the least-significant 32 bits of an IPv6 address.
#[must_use]
pub fn ls32(s: &str) -> bool {
    match s.split_once(':') {
        Some((high, low)) => h16(high) && h16(low),
        None => ipv4_address(s),
    }
}

/// `IPv6address`
///
/// ```
/// use rfc3986_uri::ip::ipv6_address;
///
/// assert!(ipv6_address("::1"));
/// assert!(ipv6_address("::"));
/// assert!(ipv6_address("2001:db8::192.0.2.1"));
/// assert!(!ipv6_address("1::2::3"));
/// ```
#[must_use]
pub fn ipv6_address(s: &str) -> bool {
    match s.split_once("::") {
        None => count_pieces(s, true) == Some(IPV6_PIECES),
        Some((head, tail)) => {
            if tail.contains("::") {
                return false;
            }
            let head = if head.is_empty() {
                Some(0)
            } else {
                count_pieces(head, false)
            };
            let tail = if tail.is_empty() {
                Some(0)
            } else {
                count_pieces(tail, true)
            };
            matches!((head, tail), (Some(h), Some(t)) if h + t < IPV6_PIECES)
        }
    }
}

/// Counts the 16-bit pieces in a `:`-separated run of `h16`, where the last
/// group may be an `IPv4address` when `ipv4_last` is set.
fn count_pieces(s: &str, ipv4_last: bool) -> Option<usize> {
    let mut pieces = 0;
    let mut groups = s.split(':').peekable();
    while let Some(group) = groups.next() {
        if groups.peek().is_none() && ipv4_last && ipv4_address(group) {
            pieces += 2;
        } else if h16(group) {
            pieces += 1;
        } else {
            return None;
        }
    }
    Some(pieces)
}

/// `IPvFuture`
///
/// The leading `v` is matched case-insensitively, as ABNF string literals are.
#[must_use]
pub fn ipv_future(s: &str) -> bool {
    let Some(rest) = s.strip_prefix(['v', 'V']) else {
        return false;
    };
    let Some((version, address)) = rest.split_once('.') else {
        return false;
    };
    !version.is_empty()
        && grammar::matches(HEXDIG, version)
        && !address.is_empty()
        && grammar::matches(IPVFUTURE, address)
}

/// Strips the brackets of an `IP-literal`, returning the enclosed text.
#[must_use]
pub fn unbracket(s: &str) -> Option<&str> {
    s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']'))
}

/// `IP-literal`: a bracketed `IPv6address` or `IPvFuture`.
///
/// ```
/// use rfc3986_uri::ip::ip_literal;
///
/// assert!(ip_literal("[::1]"));
/// assert!(ip_literal("[v1.abc]"));
/// assert!(!ip_literal("v1.abc"));
/// assert!(!ip_literal("::1"));
/// ```
#[must_use]
pub fn ip_literal(s: &str) -> bool {
    unbracket(s).is_some_and(|inner| ipv6_address(inner) || ipv_future(inner))
}
