//! # Protocols
//! The six textual conventions for a git remote, plus the scheme-less
//! scp-style shorthand:
//! ```txt
//! ssh://[user@]host.xz[:port]/path/to/repo.git
//! git://host.xz[:port]/path/to/repo.git
//! http[s]://host.xz[:port]/path/to/repo.git
//! ftp[s]://host.xz[:port]/path/to/repo.git
//! [user@]host.xz:path/to/repo.git
//! ```
//! See <https://www.git-scm.com/docs/git-clone#URLS>.
//!
//! Each protocol is parsed by the same routine; what differs is captured by a
//! `Scheme` record in the `SCHEMES` table.

use core::fmt::{self, Display};

use crate::err::Kind;

/// the port meaning "don't render a port"
pub const IMPLICIT_PORT: u16 = 0;
#[allow(missing_docs)]
pub const DEFAULT_SSH_PORT: u16 = 22;
#[allow(missing_docs)]
pub const DEFAULT_GIT_PORT: u16 = 9418;
#[allow(missing_docs)]
pub const DEFAULT_HTTP_PORT: u16 = 80;
#[allow(missing_docs)]
pub const DEFAULT_HTTPS_PORT: u16 = 443;
#[allow(missing_docs)]
pub const DEFAULT_FTP_PORT: u16 = 21;
#[allow(missing_docs)]
pub const DEFAULT_FTPS_PORT: u16 = 990;

pub(crate) const PREFIX_SSH: &str = "ssh://";
pub(crate) const PREFIX_GIT: &str = "git://";
pub(crate) const PREFIX_HTTP: &str = "http://";
pub(crate) const PREFIX_HTTPS: &str = "https://";
pub(crate) const PREFIX_FTP: &str = "ftp://";
pub(crate) const PREFIX_FTPS: &str = "ftps://";

/// The parsing strategy that produced a [`GitUrl`](crate::GitUrl).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Protocol {
    /// `ssh://[user@]host[:port]/path`
    Ssh,
    /// `git://host[:port]/path`, served by git-daemon
    Git,
    #[allow(missing_docs)]
    Http,
    #[allow(missing_docs)]
    Https,
    #[allow(missing_docs)]
    Ftp,
    #[allow(missing_docs)]
    Ftps,
    /// `[user@]host:path`, an alias for ssh without an explicit port
    Scp,
}

/// How one protocol's text is laid out.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scheme {
    pub(crate) protocol: Protocol,
    /// `None` for the scp-style shorthand
    pub(crate) prefix: Option<&'static str>,
    pub(crate) default_port: u16,
    /// whether a leading `user@` is split off
    pub(crate) has_user: bool,
    /// what ends the authority: `/` for url-like forms, `:` for scp
    pub(crate) separator: char,
    /// whether `host:port` is recognized before the separator
    pub(crate) has_port: bool,
    /// reported when `separator` is missing
    pub(crate) missing_separator: Kind,
}

const fn url_like(protocol: Protocol, prefix: &'static str, default_port: u16) -> Scheme {
    Scheme {
        protocol,
        prefix: Some(prefix),
        default_port,
        has_user: false,
        separator: '/',
        has_port: true,
        missing_separator: Kind::PathMissing,
    }
}

/// Schemes in the order the classifier tries them. The scp shorthand has no
/// prefix and matches anything, so it's the fallback and stays last.
pub(crate) static SCHEMES: [Scheme; 7] = [
    Scheme {
        has_user: true,
        ..url_like(Protocol::Ssh, PREFIX_SSH, DEFAULT_SSH_PORT)
    },
    url_like(Protocol::Git, PREFIX_GIT, DEFAULT_GIT_PORT),
    url_like(Protocol::Http, PREFIX_HTTP, DEFAULT_HTTP_PORT),
    url_like(Protocol::Https, PREFIX_HTTPS, DEFAULT_HTTPS_PORT),
    url_like(Protocol::Ftp, PREFIX_FTP, DEFAULT_FTP_PORT),
    url_like(Protocol::Ftps, PREFIX_FTPS, DEFAULT_FTPS_PORT),
    Scheme {
        protocol: Protocol::Scp,
        prefix: None,
        default_port: DEFAULT_SSH_PORT,
        has_user: true,
        separator: ':',
        has_port: false,
        missing_separator: Kind::ColonMissing,
    },
];

impl Protocol {
    /// Picks a protocol by looking at the (case-insensitive) scheme prefix of
    /// `src`. Anything without a recognized prefix is treated as scp-style.
    ///
    /// ```rust
    /// use giturl::Protocol;
    /// assert_eq!(Protocol::detect("SsH://host/repo"), Protocol::Ssh);
    /// assert_eq!(Protocol::detect("https://host/repo"), Protocol::Https);
    /// assert_eq!(Protocol::detect("git@host:repo"), Protocol::Scp);
    /// ```
    pub fn detect(src: &str) -> Self {
        Scheme::detect(src).protocol
    }
    pub(crate) fn scheme(self) -> &'static Scheme {
        match self {
            Protocol::Ssh => &SCHEMES[0],
            Protocol::Git => &SCHEMES[1],
            Protocol::Http => &SCHEMES[2],
            Protocol::Https => &SCHEMES[3],
            Protocol::Ftp => &SCHEMES[4],
            Protocol::Ftps => &SCHEMES[5],
            Protocol::Scp => &SCHEMES[6],
        }
    }
    /// the port used when the text doesn't name one
    pub fn default_port(self) -> u16 {
        self.scheme().default_port
    }
    /// e.g. `"ssh://"`; `None` for [`Protocol::Scp`]
    pub fn prefix(self) -> Option<&'static str> {
        self.scheme().prefix
    }
    /// https and ftps
    pub const fn is_secure(self) -> bool {
        matches!(self, Protocol::Https | Protocol::Ftps)
    }
    #[allow(missing_docs)]
    pub const fn as_str(self) -> &'static str {
        match self {
            Protocol::Ssh => "ssh",
            Protocol::Git => "git",
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::Ftp => "ftp",
            Protocol::Ftps => "ftps",
            Protocol::Scp => "scp",
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Scheme {
    pub(crate) fn detect(src: &str) -> &'static Self {
        SCHEMES
            .iter()
            .find(|scheme| match scheme.prefix {
                Some(prefix) => crate::text::has_prefix(src, prefix),
                None => true,
            })
            .unwrap_or(&SCHEMES[SCHEMES.len() - 1])
    }
}
