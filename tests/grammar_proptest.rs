//! Property-based tests validating the parser against the RFC 3986 grammar.
//!
//! These tests generate random valid inputs according to grammar constraints
//! and verify the parser accepts them, ensuring parser-grammar conformance.

use std::net::{Ipv4Addr, Ipv6Addr};

use proptest::prelude::*;

use rfc3986_uri::grammar::{self, PathContext};
use rfc3986_uri::split::split;
use rfc3986_uri::{HostKind, MAX_PORT, MIN_PORT, Uri, UriBuilder, ip, pct};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    /// `scheme`
    pub fn scheme() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9+.-]{0,10}"
    }

    /// Non-empty `userinfo`
    pub fn user_information() -> impl Strategy<Value = String> {
        "([a-zA-Z0-9._~!$&'()*+,;=:-]|%[0-9A-Fa-f]{2}){1,12}"
    }

    /// A DNS-style registered name. Labels start with a letter so the name
    /// can never look like a dotted-decimal address.
    pub fn reg_name() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z][a-z0-9-]{0,9}", 1..=4).prop_map(|labels| labels.join("."))
    }

    /// Generate a valid IPv4 address
    pub fn ipv4() -> impl Strategy<Value = String> {
        any::<[u8; 4]>().prop_map(|octets| Ipv4Addr::from(octets).to_string())
    }

    /// Generate a valid uncompressed IPv6 address
    pub fn ipv6_full() -> impl Strategy<Value = String> {
        prop::collection::vec(any::<u16>(), 8).prop_map(|groups| {
            groups
                .iter()
                .map(|g| format!("{g:x}"))
                .collect::<Vec<_>>()
                .join(":")
        })
    }

    /// Generate a valid IPv6 address with one run of groups replaced by `::`
    pub fn ipv6_compressed() -> impl Strategy<Value = String> {
        (prop::collection::vec(any::<u16>(), 8), 0..8usize, 1..=8usize).prop_map(
            |(groups, start, len)| {
                let end = (start + len).min(8);
                let join = |g: &[u16]| {
                    g.iter()
                        .map(|g| format!("{g:x}"))
                        .collect::<Vec<_>>()
                        .join(":")
                };
                format!("{}::{}", join(&groups[..start]), join(&groups[end..]))
            },
        )
    }

    /// Generate any valid host
    pub fn host() -> impl Strategy<Value = String> {
        prop_oneof![
            reg_name(),
            ipv4(),
            ipv6_full().prop_map(|ip| format!("[{ip}]")),
            ipv6_compressed().prop_map(|ip| format!("[{ip}]")),
            "[vV][0-9a-fA-F]{1,2}\\.[a-z0-9:]{1,8}".prop_map(|f| format!("[{f}]")),
        ]
    }

    /// `segment`, including percent-encoded octets
    pub fn segment() -> impl Strategy<Value = String> {
        "([a-zA-Z0-9._~!$&'()*+,;=:@-]|%[0-9A-F]{2}){0,8}"
    }

    /// `path-abempty`
    pub fn path_abempty() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 0..=4)
            .prop_map(|segments| segments.iter().map(|s| format!("/{s}")).collect())
    }

    /// `path-noscheme`
    pub fn path_noscheme() -> impl Strategy<Value = String> {
        (
            "([a-zA-Z0-9._~!$&'()*+,;=@-]|%[0-9A-F]{2}){1,8}",
            path_abempty(),
        )
            .prop_map(|(first, rest)| format!("{first}{rest}"))
    }

    /// Non-empty `query` or `fragment`
    pub fn query() -> impl Strategy<Value = String> {
        "([a-zA-Z0-9._~!$&'()*+,;=:@/?-]|%[0-9A-F]{2}){1,12}"
    }

    /// A valid absolute URI with authority, assembled from optional parts
    pub fn uri() -> impl Strategy<Value = String> {
        (
            scheme(),
            prop::option::of(user_information()),
            host(),
            prop::option::of(MIN_PORT..=MAX_PORT),
            path_abempty(),
            prop::option::of(query()),
            prop::option::of(query()),
        )
            .prop_map(|(scheme, user, host, port, path, query, fragment)| {
                let mut s = format!("{scheme}://");
                if let Some(user) = user {
                    s.push_str(&user);
                    s.push('@');
                }
                s.push_str(&host);
                if let Some(port) = port {
                    s.push_str(&format!(":{port}"));
                }
                s.push_str(&path);
                if let Some(query) = query {
                    s.push('?');
                    s.push_str(&query);
                }
                if let Some(fragment) = fragment {
                    s.push('#');
                    s.push_str(&fragment);
                }
                s
            })
    }
}

mod host_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_reg_names_classify(name in reg_name()) {
            prop_assert_eq!(HostKind::classify(&name), Some(HostKind::RegName));
        }

        #[test]
        fn valid_ipv4_classifies(addr in ipv4()) {
            prop_assert!(ip::ipv4_address(&addr), "rejected IPv4: {}", addr);
            prop_assert_eq!(HostKind::classify(&addr), Some(HostKind::Ipv4));
        }

        #[test]
        fn valid_full_ipv6_parses(addr in ipv6_full()) {
            prop_assert!(ip::ipv6_address(&addr), "rejected IPv6: {}", addr);
        }

        #[test]
        fn compressed_ipv6_agrees_with_std(addr in ipv6_compressed()) {
            prop_assert!(ip::ipv6_address(&addr), "rejected IPv6: {}", addr);
            prop_assert!(addr.parse::<Ipv6Addr>().is_ok());
        }

        #[test]
        fn ipv4_suffix_in_ipv6(v4 in ipv4()) {
            let addr = format!("::ffff:{v4}");
            prop_assert!(ip::ipv6_address(&addr), "rejected IPv6: {}", addr);
        }

        #[test]
        fn dec_octet_matches_numeric_range(n in 0u32..1000) {
            prop_assert_eq!(ip::dec_octet(&n.to_string()), n <= 255);
        }

        #[test]
        fn ipv6_classification_never_panics(s in "[0-9a-fA-F:.]{0,45}") {
            let _ = ip::ipv6_address(&s);
        }
    }
}

mod component_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_schemes_match(s in scheme()) {
            prop_assert!(grammar::scheme(&s));
        }

        #[test]
        fn port_is_a_numeric_range(n in 0u32..200_000) {
            let expected = u16::try_from(n).ok().filter(|p| *p >= MIN_PORT);
            prop_assert_eq!(grammar::port(&n.to_string()), expected);
        }

        #[test]
        fn valid_user_information_matches(s in user_information()) {
            prop_assert!(grammar::userinfo(&s));
        }

        #[test]
        fn abempty_paths_match_under_authority(path in path_abempty()) {
            prop_assert!(grammar::path(PathContext::Authority, &path));
        }

        #[test]
        fn noscheme_paths_match_in_relative_references(path in path_noscheme()) {
            prop_assert!(grammar::path(PathContext::Relative, &path));
            prop_assert!(grammar::path(PathContext::Scheme, &path));
        }

        #[test]
        fn valid_queries_match(q in query()) {
            prop_assert!(grammar::query(&q));
            prop_assert!(grammar::fragment(&q));
        }
    }
}

mod pct_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn decode_inverts_encode(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(pct::decode(&pct::encode(&bytes)), bytes);
        }

        #[test]
        fn encode_emits_unreserved_or_triplets(byte in any::<u8>()) {
            let encoded = pct::encode(&[byte]);
            if grammar::UNRESERVED.allows(byte) {
                prop_assert_eq!(encoded, char::from(byte).to_string());
            } else {
                prop_assert_eq!(encoded, format!("%{byte:02X}"));
            }
        }

        #[test]
        fn encoded_output_is_well_formed(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let encoded = pct::encode(&bytes);
            prop_assert!(encoded.is_ascii());
            prop_assert!(pct::is_well_formed(&encoded));
        }

        #[test]
        fn decode_never_grows(s in ".{0,32}") {
            prop_assert!(pct::decode(&s).len() <= s.len());
        }
    }
}

mod uri_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_uris_parse(input in uri()) {
            let result = Uri::parse(&input);
            prop_assert!(result.is_ok(), "Failed to parse URI: {} ({:?})", input, result);
        }

        #[test]
        fn display_roundtrip(input in uri()) {
            let uri = Uri::parse(&input).unwrap();
            prop_assert_eq!(uri.to_string(), input.clone());
            let reparsed = Uri::parse(&uri.to_string()).unwrap();
            prop_assert_eq!(reparsed.components(), uri.components());
        }

        #[test]
        fn components_survive_splitting(input in uri()) {
            let uri = Uri::parse(&input).unwrap();
            prop_assert_eq!(uri.components(), split(&input));
            prop_assert!(uri.has_authority());
            prop_assert!(uri.host().is_some());
        }

        #[test]
        fn relative_references_parse(path in path_noscheme(), q in prop::option::of(query())) {
            let input = match q {
                Some(q) => format!("{path}?{q}"),
                None => path,
            };
            let uri = Uri::parse(&input).unwrap();
            prop_assert!(uri.is_relative());
            prop_assert_eq!(uri.scheme(), None);
        }

        #[test]
        fn parsing_never_panics(s in "\\PC{0,40}") {
            let _ = Uri::parse(&s);
        }
    }
}

mod roundtrip_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn builder_roundtrip(
            s in scheme(),
            h in host(),
            port in MIN_PORT..=MAX_PORT,
            path in path_abempty()
        ) {
            let uri = UriBuilder::new()
                .scheme(s.clone())
                .host(h.clone())
                .port(port)
                .path(path.clone())
                .build()
                .unwrap();

            let reparsed = Uri::parse(&uri.to_string()).unwrap();
            prop_assert_eq!(&reparsed, &uri);
            prop_assert_eq!(reparsed.scheme(), Some(s.as_str()));
            prop_assert_eq!(reparsed.host(), Some(h.as_str()));
            prop_assert_eq!(reparsed.port_number(), Some(port));
            prop_assert_eq!(reparsed.path(), path.as_str());
        }
    }
}
