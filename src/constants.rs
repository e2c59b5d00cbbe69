//! Constants for URI splitting and validation.

/// Separates the scheme from the rest of the reference.
pub const SCHEME_DELIMITER: char = ':';

/// Introduces the authority component.
pub const AUTHORITY_PREFIX: &str = "//";

/// Separates user information from the host.
pub const USER_INFORMATION_DELIMITER: char = '@';

/// Separates the host from the port.
pub const PORT_DELIMITER: char = ':';

/// Separates path segments.
pub const PATH_SEPARATOR: char = '/';

/// Introduces the query component.
pub const QUERY_DELIMITER: char = '?';

/// Introduces the fragment component.
pub const FRAGMENT_DELIMITER: char = '#';

/// Separates the user name from the credential inside user information.
pub const CREDENTIAL_DELIMITER: char = ':';

/// Lowest port number accepted.
pub const MIN_PORT: u16 = 1;

/// Highest port number accepted.
pub const MAX_PORT: u16 = u16::MAX;

/// Characters that are never percent-encoded (RFC 3986 §2.3).
pub const UNRESERVED_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Generic delimiters (RFC 3986 §2.2).
pub const GEN_DELIMS_CHARACTERS: &str = ":/?#[]@";

/// Sub-component delimiters (RFC 3986 §2.2).
pub const SUB_DELIMS_CHARACTERS: &str = "!$&'()*+,;=";
