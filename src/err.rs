use thiserror::Error as ThisError;

/// A `Copy` discriminant of [`Error`], convenient for matching and for
/// reporting alongside [`Error::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    // domain ----------------------------------------------------
    /// nothing between the scheme (or user) and the port or path
    HostMissing,
    /// not a base-10 number that fits in 16 bits
    PortInvalid,
    // path ------------------------------------------------------
    /// no `/` between the authority and the repo, or nothing after it
    PathMissing,
    // scp -------------------------------------------------------
    /// no `:` between the host and the path
    ColonMissing,
}

/// The one way parsing fails: the text isn't a git URL. Each variant names the
/// structural expectation that wasn't met and the byte offset into the raw
/// input where it was noticed.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[allow(missing_docs)]
    #[error("invalid url, missing path to repo")]
    PathMissing { index: usize },
    /// `port` is the offending text, without the leading `:`
    #[allow(missing_docs)]
    #[error("invalid url, illegal port '{port}'")]
    PortInvalid { index: usize, port: String },
    #[allow(missing_docs)]
    #[error("invalid url, expected ':'")]
    ColonMissing { index: usize },
    #[allow(missing_docs)]
    #[error("invalid url, missing host")]
    HostMissing { index: usize },
}

impl Error {
    pub(crate) const fn at(index: usize, kind: Kind) -> Self {
        match kind {
            Kind::PathMissing => Self::PathMissing { index },
            Kind::ColonMissing => Self::ColonMissing { index },
            Kind::HostMissing => Self::HostMissing { index },
            Kind::PortInvalid => Self::PortInvalid {
                index,
                port: String::new(),
            },
        }
    }
    pub(crate) fn illegal_port(index: usize, port: &str) -> Self {
        Self::PortInvalid {
            index,
            port: port.to_owned(),
        }
    }
    #[allow(missing_docs)]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::PathMissing { .. } => Kind::PathMissing,
            Self::PortInvalid { .. } => Kind::PortInvalid,
            Self::ColonMissing { .. } => Kind::ColonMissing,
            Self::HostMissing { .. } => Kind::HostMissing,
        }
    }
    /// byte offset into the raw input
    pub const fn index(&self) -> usize {
        match self {
            Self::PathMissing { index }
            | Self::PortInvalid { index, .. }
            | Self::ColonMissing { index }
            | Self::HostMissing { index } => *index,
        }
    }
    /// Shifts the reported offset, for errors found in a slice of the input.
    pub(crate) fn offset(mut self, by: usize) -> Self {
        match &mut self {
            Self::PathMissing { index }
            | Self::PortInvalid { index, .. }
            | Self::ColonMissing { index }
            | Self::HostMissing { index } => *index = index.saturating_add(by),
        }
        self
    }
}
