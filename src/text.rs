//! # Lexical helpers
//! Case-insensitive prefix/suffix trimming and the two splitting primitives
//! every parser is built from. Nothing here allocates or fails: a prefix or
//! suffix that doesn't match leaves the input untouched.
//!
//! Note the asymmetry between [`cut`] and [`last_cut`] when the separator is
//! missing:
//! ```txt
//! cut("bomb", '/')      == ("bomb", "", false)
//! last_cut("bomb", '/') == ("", "bomb", false)
//! ```
//! `last_cut` is what splits a path into `(parent, repo)`, so an un-slashed
//! remainder is all repo and no parent path.

/// whether `src` starts with `prefix`, ignoring ASCII case
#[cfg_attr(feature = "check_no_panic", no_panic::no_panic)]
pub(crate) fn has_prefix(src: &str, prefix: &str) -> bool {
    src.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

/// `src` without a leading `prefix` (ASCII case-insensitive), or `src` unchanged
#[cfg_attr(feature = "check_no_panic", no_panic::no_panic)]
pub(crate) fn remove_prefix<'src>(src: &'src str, prefix: &str) -> &'src str {
    if has_prefix(src, prefix) {
        src.get(prefix.len()..).unwrap_or(src)
    } else {
        src
    }
}

/// Drops one trailing `/`, then a trailing `suffix` (ASCII case-insensitive)
/// if present.
#[cfg_attr(feature = "check_no_panic", no_panic::no_panic)]
pub(crate) fn remove_suffix<'src>(src: &'src str, suffix: &str) -> &'src str {
    let src = src.strip_suffix('/').unwrap_or(src);
    let Some(split) = src.len().checked_sub(suffix.len()) else {
        return src;
    };
    match (src.get(..split), src.get(split..)) {
        (Some(rest), Some(tail)) if tail.eq_ignore_ascii_case(suffix) => rest,
        _ => src,
    }
}

/// split around the first `sep`; `(src, "", false)` if there is none
#[cfg_attr(feature = "check_no_panic", no_panic::no_panic)]
pub(crate) fn cut<'src>(src: &'src str, sep: char) -> (&'src str, &'src str, bool) {
    let at = src.char_indices().find(|&(_, c)| c == sep).map(|(i, _)| i);
    match at.and_then(|i| split_around(src, i, sep)) {
        Some((before, after)) => (before, after, true),
        None => (src, "", false),
    }
}

/// split around the last `sep`; `("", src, false)` if there is none
#[cfg_attr(feature = "check_no_panic", no_panic::no_panic)]
pub(crate) fn last_cut<'src>(src: &'src str, sep: char) -> (&'src str, &'src str, bool) {
    let at = src.char_indices().rfind(|&(_, c)| c == sep).map(|(i, _)| i);
    match at.and_then(|i| split_around(src, i, sep)) {
        Some((before, after)) => (before, after, true),
        None => ("", src, false),
    }
}

/// `src[..at]` and `src[at + sep.len_utf8()..]`, without slicing that can panic
#[inline]
fn split_around(src: &str, at: usize, sep: char) -> Option<(&str, &str)> {
    Some((src.get(..at)?, src.get(at.checked_add(sep.len_utf8())?..)?))
}

/// byte offset of `tail` within `src`, where `tail` is a suffix of `src`
#[inline]
pub(crate) fn offset_of(src: &str, tail: &str) -> usize {
    debug_assert!(src.ends_with(tail), "{tail:?} is not a suffix of {src:?}");
    src.len().saturating_sub(tail.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matching_ignores_case() {
        assert!(has_prefix("SsH://host/repo", "ssh://"));
        assert!(has_prefix("ssh://", "ssh://"));
        assert!(!has_prefix("ssh:/", "ssh://"));
        assert!(!has_prefix("git@host:repo", "git://"));
        assert_eq!(remove_prefix("HTTPS://host/repo", "https://"), "host/repo");
        assert_eq!(remove_prefix("host/repo", "https://"), "host/repo");
    }

    #[test]
    fn prefix_matching_respects_char_boundaries() {
        // the 6th byte lands inside a multi-byte char
        assert!(!has_prefix("ssh:/é", "ssh://"));
        assert_eq!(remove_prefix("ssh:/é", "ssh://"), "ssh:/é");
    }

    #[test]
    fn suffix_trimming() {
        assert_eq!(remove_suffix("a/bomb.git", ".git"), "a/bomb");
        assert_eq!(remove_suffix("a/bomb.git/", ".git"), "a/bomb");
        assert_eq!(remove_suffix("a/bomb.GIT", ".git"), "a/bomb");
        assert_eq!(remove_suffix("a/bomb/", ".git"), "a/bomb");
        assert_eq!(remove_suffix("a/bomb", ".git"), "a/bomb");
        // only one trailing slash is dropped
        assert_eq!(remove_suffix("a/bomb.git//", ".git"), "a/bomb.git/");
        assert_eq!(remove_suffix("git", ".git"), "git");
        assert_eq!(remove_suffix(".git", ".git"), "");
    }

    #[test]
    fn cut_asymmetry() {
        assert_eq!(cut("a/b/c", '/'), ("a", "b/c", true));
        assert_eq!(cut("abc", '/'), ("abc", "", false));
        assert_eq!(last_cut("a/b/c", '/'), ("a/b", "c", true));
        assert_eq!(last_cut("abc", '/'), ("", "abc", false));
        assert_eq!(cut("", '@'), ("", "", false));
        assert_eq!(last_cut("", '/'), ("", "", false));
    }

    #[test]
    fn cuts_land_on_char_boundaries() {
        assert_eq!(cut("é@ü:x", '@'), ("é", "ü:x", true));
        assert_eq!(cut("é@ü:x", ':'), ("é@ü", "x", true));
        assert_eq!(last_cut("a/é/ü", '/'), ("a/é", "ü", true));
        // separators at either end
        assert_eq!(cut("/x", '/'), ("", "x", true));
        assert_eq!(last_cut("x/", '/'), ("x", "", true));
        // multi-byte separators advance past the whole char
        assert_eq!(cut("a→b→c", '→'), ("a", "b→c", true));
        assert_eq!(last_cut("a→b→c", '→'), ("a→b", "c", true));
    }

    #[test]
    fn offsets() {
        let src = "ssh://host/repo";
        assert_eq!(offset_of(src, &src[6..]), 6);
        assert_eq!(offset_of(src, ""), src.len());
    }
}
