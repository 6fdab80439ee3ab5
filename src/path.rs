//! # Path parsing
//!
//! Everything after the authority is the path to the repo. The last
//! `/`-delimited component is the repo's name; whatever precedes it is the
//! parent path, which may be empty:
//! ```txt
//! charlie/wto/bomb
//! ^^^^^^^^^^^ ^^^^
//! parent      repo
//! All-Projects
//!             ^^^^^^^^^^^^ (no parent)
//! ```
//! The `.git` suffix and a trailing `/` have already been stripped by the time
//! a path gets here.

use crate::{err::Error, text::last_cut};

/// A repo name and its (possibly empty) parent path, neither with a leading
/// or trailing `/`.
///
/// ```rust
/// use giturl::RepoPath;
/// let path = RepoPath::new("charlie/wto/bomb").unwrap();
/// assert_eq!(path.parent(), "charlie/wto");
/// assert_eq!(path.repo(), "bomb");
/// assert_eq!(path.parts().collect::<Vec<_>>(), ["charlie", "wto"]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RepoPath<'src> {
    parent: &'src str,
    repo: &'src str,
}

impl<'src> RepoPath<'src> {
    /// Split at the last `/`. Fails if the repo name would be empty.
    pub fn new(src: &'src str) -> Result<Self, Error> {
        let (parent, repo, _) = last_cut(src, '/');
        if repo.is_empty() {
            return Err(Error::PathMissing { index: src.len() });
        }
        Ok(Self { parent, repo })
    }
    #[allow(missing_docs)]
    pub const fn parent(&self) -> &'src str {
        self.parent
    }
    #[allow(missing_docs)]
    pub const fn repo(&self) -> &'src str {
        self.repo
    }
    /// Yields the `/`-delimited components of the parent path; nothing if the
    /// repo sits at the root.
    pub fn parts(&self) -> impl Iterator<Item = &'src str> {
        self.parent.split('/').filter(|part| !part.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::Kind;

    #[test]
    fn unslashed_is_all_repo() {
        let path = RepoPath::new("All-Projects").unwrap();
        assert_eq!(path.parent(), "");
        assert_eq!(path.repo(), "All-Projects");
        assert_eq!(path.parts().count(), 0);
    }

    #[test]
    fn leading_slash_leaves_an_empty_parent() {
        let path = RepoPath::new("/bomb").unwrap();
        assert_eq!(path.parent(), "");
        assert_eq!(path.repo(), "bomb");
    }

    #[test]
    fn repo_is_required() {
        let e = RepoPath::new("charlie/").unwrap_err();
        assert_eq!(e.kind(), Kind::PathMissing);
        assert_eq!(e.index(), 8);
        assert_eq!(RepoPath::new("").unwrap_err().kind(), Kind::PathMissing);
    }
}
