use thiserror::Error;

/// Errors raised by trees, sets and their cursors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No comparator was supplied where one is required.
    #[error("no comparator supplied and no natural ordering requested")]
    MissingComparator,
    /// An argument was outside of its accepted range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
    /// The tree changed while a traversal over it was in flight.
    #[error("tree modified during traversal (version {expected}, now {found})")]
    ConcurrentModification { expected: u64, found: u64 },
}
