// > Git natively supports ssh, git, http, and https protocols. FTP, and FTPS
// > can be used for fetching, but this is inefficient and deprecated.
// >
// > ```txt
// > ssh://[user@]host.xz[:port]/path/to/repo.git/
// > git://host.xz[:port]/path/to/repo.git/
// > http[s]://host.xz[:port]/path/to/repo.git/
// > ftp[s]://host.xz[:port]/path/to/repo.git/
// > ```
// >
// > An alternative scp-like syntax may also be used with the ssh protocol:
// >
// > ```txt
// > [user@]host.xz:path/to/repo.git/
// > ```
// >
// > -- https://www.git-scm.com/docs/git-clone#URLS

//! Parse git remote urls into their components and re-render them in any of
//! the supported forms.
//!
//! ```rust
//! use giturl::{GitUrl, Protocol, IMPLICIT_PORT};
//! let url: GitUrl = "ssh://git@gitlab.com/charlie/wto/bomb.git".parse().unwrap();
//! assert_eq!(url.protocol(), Protocol::Ssh);
//! assert_eq!(url.port(), 22);
//! assert_eq!(url.user(), "git");
//! assert_eq!(url.host(), "gitlab.com");
//! assert_eq!(url.path(), "charlie/wto");
//! assert_eq!(url.repo(), "bomb");
//! assert_eq!(
//!     url.to_http_format(IMPLICIT_PORT, true, true),
//!     "https://gitlab.com/charlie/wto/bomb.git"
//! );
//! ```
#![warn(missing_docs)]

pub mod domain;
mod err;
mod format;
mod parse;
pub mod path;
mod protocol;
mod text;

use core::{
    fmt::{self, Display},
    str::FromStr,
};

pub use self::{
    domain::Domain,
    err::{Error, Kind},
    parse::parse,
    path::RepoPath,
    protocol::{
        Protocol, DEFAULT_FTPS_PORT, DEFAULT_FTP_PORT, DEFAULT_GIT_PORT, DEFAULT_HTTPS_PORT,
        DEFAULT_HTTP_PORT, DEFAULT_SSH_PORT, IMPLICIT_PORT,
    },
};
use self::parse::Parts;

/// the user meaning "don't render a user"
pub const IMPLICIT_USER: &str = "";
/// the conventional user of hosted git services
pub const DEFAULT_USER: &str = "git";
/// stripped from the end of a url while parsing, optionally re-appended when formatting
pub const GIT_SUFFIX: &str = ".git";

/// A parsed git url. Immutable once parsed.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GitUrl {
    protocol: Protocol,
    port: u16,
    user: String,
    host: String,
    path: String,
    repo: String,
    raw: String,
}

impl GitUrl {
    /// Same as [`parse`].
    pub fn new(raw: &str) -> Result<Self, Error> {
        parse(raw)
    }
    pub(crate) fn from_parts(parts: Parts<'_>, raw: &str) -> Self {
        Self {
            protocol: parts.scheme.protocol,
            port: parts.port,
            user: parts.user.to_owned(),
            host: parts.domain.host().to_owned(),
            path: parts.path.parent().to_owned(),
            repo: parts.path.repo().to_owned(),
            raw: raw.to_owned(),
        }
    }
    /// which form the url was written in
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
    /// The explicit port, or the protocol's default if none was written.
    pub fn port(&self) -> u16 {
        self.port
    }
    /// Empty if no `user@` was given or the protocol doesn't take one.
    pub fn user(&self) -> &str {
        &self.user
    }
    #[allow(missing_docs)]
    pub fn host(&self) -> &str {
        &self.host
    }
    /// The parent path of the repo, without leading or trailing `/`. Empty if
    /// the repo sits at the root.
    pub fn path(&self) -> &str {
        &self.path
    }
    /// The last path component, without any `.git` suffix.
    pub fn repo(&self) -> &str {
        &self.repo
    }
    /// the input exactly as given to [`parse`]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for GitUrl {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Display for GitUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for GitUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
