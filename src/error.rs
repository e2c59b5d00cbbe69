//! Error types for URI parsing.

use std::fmt;

/// Errors that can occur when parsing or constructing a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the name of the component that was rejected.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        self.kind.component()
    }
}

/// Specific parsing error types.
///
/// Each variant corresponds to one component validator; validation stops at
/// the first component that fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    InvalidScheme {
        /// The rejected scheme
        scheme: String,
    },
    /// User information contains characters outside the userinfo grammar
    InvalidUserInformation {
        /// The rejected user information
        user_information: String,
    },
    /// User information was given without a host
    MissingHostForUserInformation {
        /// The user information that has no host
        user_information: String,
    },
    /// Host is not an IP literal, IPv4 address, or registered name
    InvalidHost {
        /// The rejected host
        host: String,
    },
    /// Port is not a decimal number in 1-65535
    InvalidPort {
        /// The rejected port
        port: String,
    },
    /// Port was given without a host
    MissingHostForPort {
        /// The port that has no host
        port: String,
    },
    /// Path does not match the path form required by its context
    InvalidPath {
        /// The rejected path
        path: String,
        /// Which path production was applied
        expected: &'static str,
    },
    /// Query contains characters outside the query grammar
    InvalidQuery {
        /// The rejected query
        query: String,
    },
    /// Fragment contains characters outside the fragment grammar
    InvalidFragment {
        /// The rejected fragment
        fragment: String,
    },
}

impl ParseErrorKind {
    /// Returns the name of the component this error refers to.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::InvalidScheme { .. } => "scheme",
            Self::InvalidUserInformation { .. } | Self::MissingHostForUserInformation { .. } => {
                "user information"
            }
            Self::InvalidHost { .. } => "host",
            Self::InvalidPort { .. } | Self::MissingHostForPort { .. } => "port",
            Self::InvalidPath { .. } => "path",
            Self::InvalidQuery { .. } => "query",
            Self::InvalidFragment { .. } => "fragment",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': {}", self.input, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme { scheme } => write!(
                f,
                "invalid scheme '{scheme}'; must start with a letter followed by letters, digits, '+', '-' or '.'"
            ),
            Self::InvalidUserInformation { user_information } => {
                write!(f, "invalid user information '{user_information}'")
            }
            Self::MissingHostForUserInformation { user_information } => write!(
                f,
                "user information '{user_information}' given without a host"
            ),
            Self::InvalidHost { host } => write!(
                f,
                "invalid host '{host}'; expected an IP literal, IPv4 address or registered name"
            ),
            Self::InvalidPort { port } => {
                write!(f, "invalid port '{port}'; must be a number in 1-65535")
            }
            Self::MissingHostForPort { port } => write!(f, "port '{port}' given without a host"),
            Self::InvalidPath { path, expected } => {
                write!(f, "invalid path '{path}'; expected {expected}")
            }
            Self::InvalidQuery { query } => write!(f, "invalid query '{query}'"),
            Self::InvalidFragment { fragment } => write!(f, "invalid fragment '{fragment}'"),
        }
    }
}

impl std::error::Error for ParseError {}
