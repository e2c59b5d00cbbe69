//! Host classification.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host = IP-literal / IPv4address / reg-name
//! ```
//!
//! The alternatives are tried from most to least specific; `reg-name` is the
//! catch-all. One exception keeps the catch-all honest: a host made of four
//! dot-separated runs of digits is an attempted IPv4 address, so when it is
//! not a valid `IPv4address` (e.g. `999.1.1.1`) it is rejected instead of
//! being accepted as a registered name.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::grammar;
use crate::ip;

/// The syntactic form of a validated host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostKind {
    /// A bracketed IPv6 address (e.g., `[::1]`)
    Ipv6,
    /// A bracketed future IP version literal (e.g., `[v1.abc]`)
    IpvFuture,
    /// A dotted-decimal IPv4 address (e.g., `192.168.1.1`)
    Ipv4,
    /// A registered name (e.g., `example.com`)
    RegName,
}

impl HostKind {
    /// Classifies a host, returning `None` if it matches no host production.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc3986_uri::HostKind;
    ///
    /// assert_eq!(HostKind::classify("[::1]"), Some(HostKind::Ipv6));
    /// assert_eq!(HostKind::classify("[v1.abc]"), Some(HostKind::IpvFuture));
    /// assert_eq!(HostKind::classify("10.0.0.1"), Some(HostKind::Ipv4));
    /// assert_eq!(HostKind::classify("example.com"), Some(HostKind::RegName));
    /// assert_eq!(HostKind::classify("999.1.1.1"), None);
    /// assert_eq!(HostKind::classify("[::1"), None);
    /// ```
    #[must_use]
    pub fn classify(host: &str) -> Option<Self> {
        if let Some(inner) = ip::unbracket(host) {
            if ip::ipv6_address(inner) {
                return Some(Self::Ipv6);
            }
            return ip::ipv_future(inner).then_some(Self::IpvFuture);
        }

        if ip::ipv4_address(host) {
            return Some(Self::Ipv4);
        }

        if looks_like_ipv4(host) {
            return None;
        }

        grammar::reg_name(host).then_some(Self::RegName)
    }

    /// Returns true for the bracketed forms.
    #[must_use]
    pub const fn is_ip_literal(self) -> bool {
        matches!(self, Self::Ipv6 | Self::IpvFuture)
    }

    /// Converts a host of this kind to an IP address, if it is one.
    #[must_use]
    pub fn to_ip_addr(self, host: &str) -> Option<IpAddr> {
        match self {
            Self::Ipv4 => host.parse::<Ipv4Addr>().ok().map(IpAddr::V4),
            Self::Ipv6 => ip::unbracket(host)?
                .parse::<Ipv6Addr>()
                .ok()
                .map(IpAddr::V6),
            Self::IpvFuture | Self::RegName => None,
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ipv6 => "IPv6 address",
            Self::IpvFuture => "IPvFuture literal",
            Self::Ipv4 => "IPv4 address",
            Self::RegName => "registered name",
        };
        f.write_str(name)
    }
}

fn looks_like_ipv4(host: &str) -> bool {
    let mut labels = 0;
    host.split('.').all(|label| {
        labels += 1;
        !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit())
    }) && labels == 4
}
