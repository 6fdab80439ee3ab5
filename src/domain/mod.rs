//! # Domain: host and an optional port
//! The authority section of the url-like forms:
//! ```txt
//! ssh://git@gitlab.com:2222/charlie/wto/bomb.git
//!           ^^^^^^^^^^^^^^^
//! https://gitlab.com/charlie/wto/bomb.git
//!         ^^^^^^^^^^
//! ```
//! The grammar is:
//! ```ebnf
//! domain      ::= host (":" port-number)?
//! host        ::= [^:]+
//! port-number ::= [0-9]+
//! ```
//! Note that the host is split at the **first** `:`, so bracketed IPv6
//! literals aren't supported, and the host isn't otherwise validated: no DNS
//! rules, no percent-decoding.

pub(crate) mod port;

use crate::{err::Error, text::cut};

/// A non-empty host and, if the text had a `:`, the raw port text after it.
///
/// ```rust
/// use giturl::Domain;
/// let domain = Domain::new("gitlab.com:2222").unwrap();
/// assert_eq!(domain.host(), "gitlab.com");
/// assert_eq!(domain.port(), Some("2222"));
/// assert_eq!(domain.resolve_port(22), Ok(2222));
///
/// let domain = Domain::new("gitlab.com").unwrap();
/// assert_eq!(domain.port(), None);
/// assert_eq!(domain.resolve_port(22), Ok(22));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Domain<'src> {
    host: &'src str,
    port: Option<&'src str>,
}

impl<'src> Domain<'src> {
    /// Split `src` into host and port text. Fails if the host is empty; the
    /// port text is only checked by [`Domain::resolve_port`].
    pub fn new(src: &'src str) -> Result<Self, Error> {
        let (host, port, has_port) = cut(src, ':');
        if host.is_empty() {
            return Err(Error::HostMissing { index: 0 });
        }
        Ok(Self {
            host,
            port: has_port.then_some(port),
        })
    }
    /// a domain that is all host, even if it contains a `:`
    pub(crate) fn host_only(src: &'src str) -> Result<Self, Error> {
        if src.is_empty() {
            return Err(Error::HostMissing { index: 0 });
        }
        Ok(Self {
            host: src,
            port: None,
        })
    }
    #[allow(missing_docs)]
    pub const fn host(&self) -> &'src str {
        self.host
    }
    /// Not including the leading `:`. `Some("")` for a dangling colon.
    pub const fn port(&self) -> Option<&'src str> {
        self.port
    }
    /// The explicit port if there is one, else `default`. Error indices are
    /// relative to the start of the domain.
    pub fn resolve_port(&self, default: u16) -> Result<u16, Error> {
        match self.port {
            None => Ok(default),
            Some(port) => port::parse_port(port).map_err(|e| e.offset(self.host.len() + 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::Kind;

    #[test]
    fn splits_at_first_colon() {
        let domain = Domain::new("119.91.33.58:29418").unwrap();
        assert_eq!(domain.host(), "119.91.33.58");
        assert_eq!(domain.port(), Some("29418"));
        assert_eq!(domain.resolve_port(22), Ok(29418));

        let domain = Domain::new("host:1:2").unwrap();
        assert_eq!(domain.host(), "host");
        assert_eq!(domain.port(), Some("1:2"));
    }

    #[test]
    fn port_errors_point_past_the_colon() {
        let domain = Domain::new("host:65536").unwrap();
        let e = domain.resolve_port(22).unwrap_err();
        assert_eq!(e.kind(), Kind::PortInvalid);
        assert_eq!(e.index(), 5);

        let domain = Domain::new("host:").unwrap();
        assert_eq!(domain.port(), Some(""));
        assert_eq!(domain.resolve_port(22).unwrap_err().to_string(), "invalid url, illegal port ''");
    }

    #[test]
    fn host_is_required() {
        assert_eq!(Domain::new(":22").unwrap_err().kind(), Kind::HostMissing);
        assert_eq!(Domain::new("").unwrap_err().kind(), Kind::HostMissing);
        assert_eq!(Domain::host_only("").unwrap_err().kind(), Kind::HostMissing);
    }

    #[test]
    fn host_only_keeps_colons() {
        let domain = Domain::host_only("a:b").unwrap();
        assert_eq!(domain.host(), "a:b");
        assert_eq!(domain.resolve_port(22), Ok(22));
    }
}
