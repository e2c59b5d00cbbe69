//! Typestate builder for constructing [`Uri`] instances.
//!
//! User information and a port belong to the authority and are meaningless
//! without a host, so the builder only offers them once a host is set.

use std::marker::PhantomData;

use crate::error::ParseError;
use crate::uri::Uri;

/// Marker: no host set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

/// Marker: a host has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasHost;

/// A typestate builder for constructing [`Uri`] instances.
///
/// Scheme, path, query and fragment can be set in any state. User
/// information and port become available after [`host`](UriBuilder::host).
/// Every component is validated by [`build`](UriBuilder::build), exactly
/// as [`Uri::from_parts`] does.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::UriBuilder;
///
/// let uri = UriBuilder::new()
///     .scheme("https")
///     .host("example.com")
///     .user_information("anna")
///     .port(8443)
///     .path("/docs")
///     .query("page=2")
///     .build()
///     .unwrap();
///
/// assert_eq!(uri.to_string(), "https://anna@example.com:8443/docs?page=2");
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use rfc3986_uri::UriBuilder;
///
/// // Error: a port needs a host
/// let builder = UriBuilder::new().scheme("http").port(80);
/// ```
///
/// ```compile_fail
/// use rfc3986_uri::UriBuilder;
///
/// // Error: user information needs a host
/// let builder = UriBuilder::new().user_information("anna");
/// ```
#[derive(Debug, Clone)]
pub struct UriBuilder<State = NoHost> {
    scheme: String,
    user_information: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: String,
    fragment: String,
    _state: PhantomData<State>,
}

impl UriBuilder<NoHost> {
    /// Creates a new builder with every component absent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: String::new(),
            user_information: String::new(),
            host: String::new(),
            port: None,
            path: String::new(),
            query: String::new(),
            fragment: String::new(),
            _state: PhantomData,
        }
    }

    /// Sets the host and advances to the [`HasHost`] state.
    ///
    /// IP literals are given with their brackets, e.g. `[::1]`.
    #[must_use]
    pub fn host(self, host: impl Into<String>) -> UriBuilder<HasHost> {
        UriBuilder {
            scheme: self.scheme,
            user_information: self.user_information,
            host: host.into(),
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
            _state: PhantomData,
        }
    }
}

impl Default for UriBuilder<NoHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl UriBuilder<HasHost> {
    /// Sets the user information.
    #[must_use]
    pub fn user_information(mut self, user_information: impl Into<String>) -> Self {
        self.user_information = user_information.into();
        self
    }

    /// Sets the port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

impl<State> UriBuilder<State> {
    /// Sets the scheme.
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Sets the path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the fragment.
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = fragment.into();
        self
    }

    /// Validates the components and builds the URI.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if any component does not match its grammar.
    pub fn build(self) -> Result<Uri, ParseError> {
        let port = self.port.map(|p| p.to_string()).unwrap_or_default();
        Uri::from_parts(
            &self.scheme,
            &self.user_information,
            &self.host,
            &port,
            &self.path,
            &self.query,
            &self.fragment,
        )
    }
}
