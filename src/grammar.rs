//! Character classes and productions from RFC 3986 §§2–3.
//!
//! Each production is a pure function performing an anchored, full-string
//! match. Productions are composed from [`CharClass`] constants rather than
//! from concatenated pattern strings, so every rule can be tested alone.
//!
//! # Grammar Reference
//!
//! ```abnf
//! pct-encoded   = "%" HEXDIG HEXDIG
//! unreserved    = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! gen-delims    = ":" / "/" / "?" / "#" / "[" / "]" / "@"
//! sub-delims    = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
//! scheme        = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! userinfo      = *( unreserved / pct-encoded / sub-delims / ":" )
//! reg-name      = *( unreserved / pct-encoded / sub-delims )
//! port          = *DIGIT
//! pchar         = unreserved / pct-encoded / sub-delims / ":" / "@"
//! segment       = *pchar
//! segment-nz    = 1*pchar
//! segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )
//! query         = *( pchar / "/" / "?" )
//! fragment      = *( pchar / "/" / "?" )
//! ```
//!
//! The IP address productions live in [`crate::ip`].

use crate::constants::{MIN_PORT, PATH_SEPARATOR};

/// A set of ASCII bytes, stored as a 128-bit mask.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::grammar::{CharClass, SUB_DELIMS, UNRESERVED};
///
/// let reg_name = UNRESERVED.or(SUB_DELIMS);
/// assert!(reg_name.allows(b'~'));
/// assert!(reg_name.allows(b'!'));
/// assert!(!reg_name.allows(b'/'));
///
/// let colon = CharClass::new(b":");
/// assert!(reg_name.or(colon).allows(b':'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClass(u128);

impl CharClass {
    /// Creates a class containing exactly the given bytes.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a constant) if any byte is not ASCII.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut mask = 0u128;
        while let [current, rest @ ..] = bytes {
            assert!(current.is_ascii(), "character classes only hold ASCII bytes");
            mask |= 1u128 << *current;
            bytes = rest;
        }
        Self(mask)
    }

    /// Creates a class containing the inclusive byte range `start..=end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` is not ASCII.
    #[must_use]
    pub const fn range(start: u8, end: u8) -> Self {
        assert!(end.is_ascii(), "character classes only hold ASCII bytes");
        let mut mask = 0u128;
        let mut byte = start;
        while byte <= end {
            mask |= 1u128 << byte;
            byte += 1;
        }
        Self(mask)
    }

    /// Returns the union of two classes.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if the byte belongs to this class.
    #[must_use]
    pub const fn allows(self, byte: u8) -> bool {
        byte.is_ascii() && self.0 & (1u128 << byte) != 0
    }
}

/// `ALPHA`
pub const ALPHA: CharClass = CharClass::range(b'A', b'Z').or(CharClass::range(b'a', b'z'));

/// `DIGIT`
pub const DIGIT: CharClass = CharClass::range(b'0', b'9');

/// `HEXDIG` (either case)
pub const HEXDIG: CharClass = DIGIT
    .or(CharClass::range(b'A', b'F'))
    .or(CharClass::range(b'a', b'f'));

/// `unreserved`
pub const UNRESERVED: CharClass = ALPHA.or(DIGIT).or(CharClass::new(b"-._~"));

/// `sub-delims`
pub const SUB_DELIMS: CharClass = CharClass::new(b"!$&'()*+,;=");

/// `gen-delims`
pub const GEN_DELIMS: CharClass = CharClass::new(b":/?#[]@");

/// `reserved`
pub const RESERVED: CharClass = GEN_DELIMS.or(SUB_DELIMS);

/// Characters allowed after the first letter of a scheme.
pub const SCHEME_TAIL: CharClass = ALPHA.or(DIGIT).or(CharClass::new(b"+-."));

/// Literal characters of `userinfo`.
pub const USERINFO: CharClass = UNRESERVED.or(SUB_DELIMS).or(CharClass::new(b":"));

/// Literal characters of `reg-name`.
pub const REG_NAME: CharClass = UNRESERVED.or(SUB_DELIMS);

/// Literal characters of `pchar`.
pub const PCHAR: CharClass = UNRESERVED.or(SUB_DELIMS).or(CharClass::new(b":@"));

/// Literal characters of `segment-nz-nc`.
pub const SEGMENT_NZ_NC: CharClass = UNRESERVED.or(SUB_DELIMS).or(CharClass::new(b"@"));

/// Literal characters of `query`.
pub const QUERY: CharClass = PCHAR.or(CharClass::new(b"/?"));

/// Literal characters of `fragment`.
pub const FRAGMENT: CharClass = QUERY;

/// Characters allowed after the `.` of an `IPvFuture`.
pub const IPVFUTURE: CharClass = UNRESERVED.or(SUB_DELIMS).or(CharClass::new(b":"));

/// Returns true if every byte of `s` is in `class`.
#[must_use]
pub fn matches(class: CharClass, s: &str) -> bool {
    s.bytes().all(|b| class.allows(b))
}

/// Returns true if `s` is zero or more of (`class` member / `pct-encoded`).
#[must_use]
pub fn matches_encoded(class: CharClass, s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if !is_pct_encoded_at(bytes, i) {
                return false;
            }
            i += 3;
        } else if class.allows(bytes[i]) {
            i += 1;
        } else {
            return false;
        }
    }
    true
}

fn is_pct_encoded_at(bytes: &[u8], i: usize) -> bool {
    matches!(
        bytes.get(i..i + 3),
        Some([b'%', hi, lo]) if HEXDIG.allows(*hi) && HEXDIG.allows(*lo)
    )
}

/// `pct-encoded`: exactly one percent-triplet.
#[must_use]
pub fn pct_encoded(s: &str) -> bool {
    s.len() == 3 && is_pct_encoded_at(s.as_bytes(), 0)
}

/// `scheme`
///
/// ```
/// use rfc3986_uri::grammar::scheme;
///
/// assert!(scheme("http"));
/// assert!(scheme("a+b-c.d"));
/// assert!(!scheme("1http"));
/// ```
#[must_use]
pub fn scheme(s: &str) -> bool {
    match s.as_bytes() {
        [first, rest @ ..] => ALPHA.allows(*first) && rest.iter().all(|b| SCHEME_TAIL.allows(*b)),
        [] => false,
    }
}

/// `userinfo`
#[must_use]
pub fn userinfo(s: &str) -> bool {
    matches_encoded(USERINFO, s)
}

/// `reg-name`
#[must_use]
pub fn reg_name(s: &str) -> bool {
    matches_encoded(REG_NAME, s)
}

/// `port`, restricted to the numeric range 1-65535.
///
/// Returns the port number on success. Leading zeros are allowed; the value,
/// not the digit count, decides.
///
/// ```
/// use rfc3986_uri::grammar::port;
///
/// assert_eq!(port("1"), Some(1));
/// assert_eq!(port("65535"), Some(65535));
/// assert_eq!(port("0"), None);
/// assert_eq!(port("65536"), None);
/// ```
#[must_use]
pub fn port(s: &str) -> Option<u16> {
    if s.is_empty() || !matches(DIGIT, s) {
        return None;
    }
    let digits = s.trim_start_matches('0');
    if digits.len() > 5 {
        return None;
    }
    digits.parse::<u16>().ok().filter(|p| *p >= MIN_PORT)
}

/// `segment`
#[must_use]
pub fn segment(s: &str) -> bool {
    matches_encoded(PCHAR, s)
}

/// `segment-nz`
#[must_use]
pub fn segment_nz(s: &str) -> bool {
    !s.is_empty() && segment(s)
}

/// `segment-nz-nc`: a non-empty segment without any colon.
#[must_use]
pub fn segment_nz_nc(s: &str) -> bool {
    !s.is_empty() && matches_encoded(SEGMENT_NZ_NC, s)
}

/// `path-abempty = *( "/" segment )`
#[must_use]
pub fn path_abempty(s: &str) -> bool {
    s.is_empty()
        || s
            .strip_prefix(PATH_SEPARATOR)
            .is_some_and(|rest| rest.split(PATH_SEPARATOR).all(segment))
}

/// `path-absolute = "/" [ segment-nz *( "/" segment ) ]`
#[must_use]
pub fn path_absolute(s: &str) -> bool {
    s.strip_prefix(PATH_SEPARATOR)
        .is_some_and(|rest| rest.is_empty() || leading_segment_then_rest(rest, segment_nz))
}

/// `path-noscheme = segment-nz-nc *( "/" segment )`
#[must_use]
pub fn path_noscheme(s: &str) -> bool {
    leading_segment_then_rest(s, segment_nz_nc)
}

/// `path-rootless = segment-nz *( "/" segment )`
#[must_use]
pub fn path_rootless(s: &str) -> bool {
    leading_segment_then_rest(s, segment_nz)
}

/// `path-empty = 0<pchar>`
#[must_use]
pub fn path_empty(s: &str) -> bool {
    s.is_empty()
}

fn leading_segment_then_rest(s: &str, first: fn(&str) -> bool) -> bool {
    let mut segments = s.split(PATH_SEPARATOR);
    segments.next().is_some_and(first) && segments.all(segment)
}

/// `query`
#[must_use]
pub fn query(s: &str) -> bool {
    matches_encoded(QUERY, s)
}

/// `fragment`
#[must_use]
pub fn fragment(s: &str) -> bool {
    matches_encoded(FRAGMENT, s)
}

/// What precedes a path, which decides the path form that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathContext {
    /// An authority (`//...`) precedes the path
    Authority,
    /// A scheme but no authority precedes the path
    Scheme,
    /// Neither scheme nor authority precedes the path (relative reference)
    Relative,
}

/// The five mutually exclusive path productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathForm {
    /// `path-abempty`
    AbEmpty,
    /// `path-absolute`
    Absolute,
    /// `path-noscheme`
    NoScheme,
    /// `path-rootless`
    Rootless,
    /// `path-empty`
    Empty,
}

impl PathForm {
    /// Selects the single production that applies to `path` in `context`.
    ///
    /// ```
    /// use rfc3986_uri::grammar::{PathContext, PathForm};
    ///
    /// assert_eq!(PathForm::select(PathContext::Authority, "/a"), PathForm::AbEmpty);
    /// assert_eq!(PathForm::select(PathContext::Scheme, "/a"), PathForm::Absolute);
    /// assert_eq!(PathForm::select(PathContext::Scheme, "a:b"), PathForm::Rootless);
    /// assert_eq!(PathForm::select(PathContext::Relative, "a"), PathForm::NoScheme);
    /// assert_eq!(PathForm::select(PathContext::Relative, ""), PathForm::Empty);
    /// ```
    #[must_use]
    pub fn select(context: PathContext, path: &str) -> Self {
        if path.is_empty() {
            return Self::Empty;
        }
        match context {
            PathContext::Authority => Self::AbEmpty,
            _ if path.starts_with(PATH_SEPARATOR) => Self::Absolute,
            PathContext::Scheme => Self::Rootless,
            PathContext::Relative => Self::NoScheme,
        }
    }

    /// Returns true if `path` matches this production.
    #[must_use]
    pub fn matches(self, path: &str) -> bool {
        match self {
            Self::AbEmpty => path_abempty(path),
            Self::Absolute => path_absolute(path),
            Self::NoScheme => path_noscheme(path),
            Self::Rootless => path_rootless(path),
            Self::Empty => path_empty(path),
        }
    }

    /// Returns the ABNF rule name.
    #[must_use]
    pub const fn rule_name(self) -> &'static str {
        match self {
            Self::AbEmpty => "path-abempty",
            Self::Absolute => "path-absolute",
            Self::NoScheme => "path-noscheme",
            Self::Rootless => "path-rootless",
            Self::Empty => "path-empty",
        }
    }
}

/// `path`, checked against the one production its context selects.
#[must_use]
pub fn path(context: PathContext, s: &str) -> bool {
    PathForm::select(context, s).matches(s)
}
