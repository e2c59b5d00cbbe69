//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use rfc3986_uri::prelude::*;
//!
//! let uri = Uri::parse("http://[::1]:8080/").unwrap();
//! assert_eq!(uri.host_kind(), Some(HostKind::Ipv6));
//! ```
//!
//! Builder state markers (`NoHost`, `HasHost`) are left out; they only appear
//! in type annotations.

pub use crate::{
    // Core types
    Components, HostKind, PathContext, PathForm, Uri,
    // Builder
    UriBuilder,
    // Errors
    ParseError, ParseErrorKind,
    // Constants
    MAX_PORT, MIN_PORT,
};
