//! # Formatting
//! Each formatter is the inverse of one family of parsers. Host, path and repo
//! always come from the parsed url; the caller picks the user, the port and
//! whether to append `.git`.
//!
//! An empty user ([`IMPLICIT_USER`](crate::IMPLICIT_USER)) drops the `user@`
//! segment and port 0 ([`IMPLICIT_PORT`](crate::IMPLICIT_PORT)) drops the
//! `:port` segment, whatever the target protocol's default would be.

use crate::{
    protocol::{PREFIX_FTP, PREFIX_FTPS, PREFIX_GIT, PREFIX_HTTP, PREFIX_HTTPS, PREFIX_SSH},
    GitUrl, GIT_SUFFIX, IMPLICIT_PORT,
};

impl GitUrl {
    /// `ssh://[user@]host[:port]/path/to/repo[.git]`
    ///
    /// ```rust
    /// use giturl::{GitUrl, DEFAULT_SSH_PORT, DEFAULT_USER};
    /// let url = GitUrl::new("http://gitlab.com/charlie/wto/bomb.git").unwrap();
    /// assert_eq!(
    ///     url.to_ssh_format(DEFAULT_USER, DEFAULT_SSH_PORT, true),
    ///     "ssh://git@gitlab.com:22/charlie/wto/bomb.git"
    /// );
    /// ```
    pub fn to_ssh_format(&self, user: &str, port: u16, with_suffix: bool) -> String {
        let mut out = String::from(PREFIX_SSH);
        Self::push_user(&mut out, user);
        self.push_authority(&mut out, port);
        self.push_path(&mut out, '/', with_suffix);
        out
    }

    /// `git://host[:port]/path/to/repo[.git]`; git-daemon carries no user.
    pub fn to_git_format(&self, port: u16, with_suffix: bool) -> String {
        let mut out = String::from(PREFIX_GIT);
        self.push_authority(&mut out, port);
        self.push_path(&mut out, '/', with_suffix);
        out
    }

    /// `http[s]://host[:port]/path/to/repo[.git]`
    ///
    /// ```rust
    /// use giturl::GitUrl;
    /// let url = GitUrl::new("ssh://git@gitlab.com/charlie/wto/bomb.git").unwrap();
    /// assert_eq!(url.to_http_format(0, false, false), "http://gitlab.com/charlie/wto/bomb");
    /// ```
    pub fn to_http_format(&self, port: u16, is_secure: bool, with_suffix: bool) -> String {
        let mut out = String::from(if is_secure { PREFIX_HTTPS } else { PREFIX_HTTP });
        self.push_authority(&mut out, port);
        self.push_path(&mut out, '/', with_suffix);
        out
    }

    /// `ftp[s]://host[:port]/path/to/repo[.git]`
    pub fn to_ftp_format(&self, port: u16, is_secure: bool, with_suffix: bool) -> String {
        let mut out = String::from(if is_secure { PREFIX_FTPS } else { PREFIX_FTP });
        self.push_authority(&mut out, port);
        self.push_path(&mut out, '/', with_suffix);
        out
    }

    /// `[user@]host:path/to/repo[.git]`; the shorthand has no port syntax.
    pub fn to_scp_format(&self, user: &str, with_suffix: bool) -> String {
        let mut out = String::new();
        Self::push_user(&mut out, user);
        out.push_str(&self.host);
        self.push_path(&mut out, ':', with_suffix);
        out
    }

    fn push_user(out: &mut String, user: &str) {
        if !user.is_empty() {
            out.push_str(user);
            out.push('@');
        }
    }

    fn push_authority(&self, out: &mut String, port: u16) {
        out.push_str(&self.host);
        if port != IMPLICIT_PORT {
            out.push(':');
            out.push_str(&port.to_string());
        }
    }

    /// `{separator}[path/]repo[.git]`
    fn push_path(&self, out: &mut String, separator: char, with_suffix: bool) {
        out.push(separator);
        if !self.path.is_empty() {
            out.push_str(&self.path);
            out.push('/');
        }
        out.push_str(&self.repo);
        if with_suffix {
            out.push_str(GIT_SUFFIX);
        }
    }
}
