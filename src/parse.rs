//! One parsing routine for every protocol, steered by the protocol's `Scheme`:
//!
//! 1. drop one trailing `/` and a trailing `.git`
//! 2. drop the scheme prefix, if the protocol has one
//! 3. split off `user@` at the first `@`, if the protocol takes a user
//! 4. split the authority from the path at the first separator (`/` or `:`)
//! 5. split the authority into host and port, if the protocol has port syntax
//! 6. split the path into parent and repo at the last `/`

use crate::{
    domain::Domain,
    err::Error,
    path::RepoPath,
    protocol::Scheme,
    text::{cut, offset_of, remove_prefix, remove_suffix},
    GitUrl, GIT_SUFFIX,
};

/// The borrowed pieces of a parsed url.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Parts<'src> {
    pub(crate) scheme: &'static Scheme,
    pub(crate) user: &'src str,
    pub(crate) domain: Domain<'src>,
    pub(crate) port: u16,
    pub(crate) path: RepoPath<'src>,
}

impl<'src> Parts<'src> {
    /// Error indices are byte offsets into `raw`.
    pub(crate) fn new(scheme: &'static Scheme, raw: &'src str) -> Result<Self, Error> {
        let trimmed = remove_suffix(raw, GIT_SUFFIX);
        let mut rest = match scheme.prefix {
            Some(prefix) => remove_prefix(trimmed, prefix),
            None => trimmed,
        };

        let mut user = "";
        if scheme.has_user {
            if let (before, after, true) = cut(rest, '@') {
                user = before;
                rest = after;
            }
        }

        let authority_start = offset_of(trimmed, rest);
        let (authority, path, found) = cut(rest, scheme.separator);
        if !found {
            return Err(Error::at(trimmed.len(), scheme.missing_separator));
        }

        let domain = if scheme.has_port {
            Domain::new(authority)
        } else {
            Domain::host_only(authority)
        }
        .map_err(|e| e.offset(authority_start))?;
        let port = domain
            .resolve_port(scheme.default_port)
            .map_err(|e| e.offset(authority_start))?;

        let path_start = offset_of(trimmed, path);
        let path = RepoPath::new(path).map_err(|e| e.offset(path_start))?;

        Ok(Self {
            scheme,
            user,
            domain,
            port,
            path,
        })
    }
}

/// Parse any supported form of git url.
///
/// ```rust
/// use giturl::{parse, Protocol};
/// let url = parse("git@gitlab.com:charlie/wto/bomb.git").unwrap();
/// assert_eq!(url.protocol(), Protocol::Scp);
/// assert_eq!(url.port(), 22);
/// assert_eq!(url.user(), "git");
/// assert_eq!(url.host(), "gitlab.com");
/// assert_eq!(url.path(), "charlie/wto");
/// assert_eq!(url.repo(), "bomb");
///
/// let err = parse("ssh://admin@119.91.33.58:65536/All-Projects").unwrap_err();
/// assert_eq!(err.to_string(), "invalid url, illegal port '65536'");
/// ```
pub fn parse(raw: &str) -> Result<GitUrl, Error> {
    let scheme = Scheme::detect(raw);
    log::trace!("parsing {raw:?} as {}", scheme.protocol);
    match Parts::new(scheme, raw) {
        Ok(parts) => Ok(GitUrl::from_parts(parts, raw)),
        Err(e) => {
            log::debug!("rejected {raw:?} ({} @ {}): {e}", scheme.protocol, e.index());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{err::Kind, Protocol};

    fn parts(raw: &str) -> Result<Parts<'_>, Error> {
        Parts::new(Scheme::detect(raw), raw)
    }

    #[test]
    fn ssh_splits_every_component() {
        let p = parts("ssh://git@gitlab.com:2222/charlie/wto/bomb.git").unwrap();
        assert_eq!(p.scheme.protocol, Protocol::Ssh);
        assert_eq!(p.user, "git");
        assert_eq!(p.domain.host(), "gitlab.com");
        assert_eq!(p.port, 2222);
        assert_eq!(p.path.parent(), "charlie/wto");
        assert_eq!(p.path.repo(), "bomb");
    }

    #[test]
    fn only_ssh_and_scp_split_off_a_user() {
        let p = parts("https://user@host/a/b").unwrap();
        assert_eq!(p.user, "");
        assert_eq!(p.domain.host(), "user@host");
        let p = parts("git://user@host/a/b").unwrap();
        assert_eq!(p.user, "");
        assert_eq!(p.domain.host(), "user@host");
    }

    #[test]
    fn user_split_happens_before_the_path_split() {
        // the first `@` wins even when it sits in the path
        let p = parts("ssh://host/a@b/c").unwrap();
        assert_eq!(p.user, "host/a");
        assert_eq!(p.domain.host(), "b");
        assert_eq!(p.path.repo(), "c");
    }

    #[test]
    fn scp_has_no_port_syntax() {
        let p = parts("git@host:2222/repo").unwrap();
        assert_eq!(p.domain.host(), "host");
        assert_eq!(p.port, 22);
        assert_eq!(p.path.parent(), "2222");
        assert_eq!(p.path.repo(), "repo");
    }

    #[test]
    fn error_indices_point_into_the_raw_input() {
        let raw = "ssh://admin@119.91.33.58:65536/All-Projects";
        let e = parts(raw).unwrap_err();
        assert_eq!(e.kind(), Kind::PortInvalid);
        assert_eq!(&raw[e.index()..e.index() + 5], "65536");

        let raw = "git://gitlab.com.git";
        let e = parts(raw).unwrap_err();
        assert_eq!(e.kind(), Kind::PathMissing);
        assert_eq!(e.index(), "git://gitlab.com".len());

        let raw = "git@gitlab.com/charlie/wto/bomb.git";
        let e = parts(raw).unwrap_err();
        assert_eq!(e.kind(), Kind::ColonMissing);
        assert_eq!(e.index(), "git@gitlab.com/charlie/wto/bomb".len());

        let raw = "ssh://git@:22/bomb";
        let e = parts(raw).unwrap_err();
        assert_eq!(e.kind(), Kind::HostMissing);
        assert_eq!(e.index(), "ssh://git@".len());
    }

    #[test]
    fn empty_repo_is_a_missing_path() {
        let e = parts("ssh://host//").unwrap_err();
        assert_eq!(e.kind(), Kind::PathMissing);
        let e = parts("git@host:").unwrap_err();
        assert_eq!(e.kind(), Kind::PathMissing);
    }
}
