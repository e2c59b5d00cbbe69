//! Component validators.
//!
//! One function per component, run by [`Uri`](crate::Uri) in the fixed order
//! scheme, user information, host, port, path, query, fragment. Each checks
//! the raw text of a single component; the cross-component rules (a port or
//! user information needs a host) are checked where the later component is
//! validated. Empty strings stand for absent components and always pass.

use crate::error::ParseErrorKind;
use crate::grammar::{self, PathContext, PathForm};
use crate::host::HostKind;
use crate::pct;

/// A host that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidHost {
    /// The host with its non-ASCII bytes percent-encoded
    pub raw: String,
    pub kind: HostKind,
}

pub(crate) fn scheme(scheme: &str) -> Result<(), ParseErrorKind> {
    if scheme.is_empty() || grammar::scheme(scheme) {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidScheme {
            scheme: scheme.to_string(),
        })
    }
}

pub(crate) fn user_information(user_information: &str) -> Result<(), ParseErrorKind> {
    if grammar::userinfo(user_information) {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidUserInformation {
            user_information: user_information.to_string(),
        })
    }
}

/// Validates the host. `user_information` is the already validated user
/// information, which may not stand without a host.
pub(crate) fn host(host: &str, user_information: &str) -> Result<Option<ValidHost>, ParseErrorKind> {
    if host.is_empty() {
        if user_information.is_empty() {
            return Ok(None);
        }
        return Err(ParseErrorKind::MissingHostForUserInformation {
            user_information: user_information.to_string(),
        });
    }

    let raw = pct::encode_non_ascii(host);
    match HostKind::classify(&raw) {
        Some(kind) => Ok(Some(ValidHost {
            raw: raw.into_owned(),
            kind,
        })),
        None => Err(ParseErrorKind::InvalidHost {
            host: host.to_string(),
        }),
    }
}

/// Validates the port and returns its number. The port grammar is checked
/// before the presence of a host.
pub(crate) fn port(port: &str, has_host: bool) -> Result<Option<u16>, ParseErrorKind> {
    if port.is_empty() {
        return Ok(None);
    }
    let Some(number) = grammar::port(port) else {
        return Err(ParseErrorKind::InvalidPort {
            port: port.to_string(),
        });
    };
    if !has_host {
        return Err(ParseErrorKind::MissingHostForPort {
            port: port.to_string(),
        });
    }
    Ok(Some(number))
}

pub(crate) fn path(path: &str, context: PathContext) -> Result<(), ParseErrorKind> {
    let form = PathForm::select(context, path);
    if form.matches(path) {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidPath {
            path: path.to_string(),
            expected: form.rule_name(),
        })
    }
}

pub(crate) fn query(query: &str) -> Result<(), ParseErrorKind> {
    if grammar::query(query) {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidQuery {
            query: query.to_string(),
        })
    }
}

pub(crate) fn fragment(fragment: &str) -> Result<(), ParseErrorKind> {
    if grammar::fragment(fragment) {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidFragment {
            fragment: fragment.to_string(),
        })
    }
}
