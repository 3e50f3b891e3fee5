//! Error types for canvas mounting.
//!
//! Mount-contract violations are configuration errors on the host's side and
//! are unrecoverable by design: initialization returns `Err` and the host
//! must fix its usage. Runtime geometry operations are total and never fail.

use thiserror::Error;

/// Errors detected once when mounting the canvas over a host container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The drawing container was given more than one child element.
    #[error("drawing container has {count} child elements, expected exactly 1")]
    MultipleChildren { count: usize },

    /// The drawing container's child element has no stable identifier.
    #[error("drawing container child has no id")]
    MissingContainerId,

    /// The drawing container was given no child element at all.
    #[error("drawing container has no child element")]
    NoChildren,
}

/// Result type alias for mount operations.
pub type MountResult<T> = Result<T, MountError>;
