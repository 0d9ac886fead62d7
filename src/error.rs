//! Error type shared by the navigation model and view helpers.

use crate::navigation::PageId;

/// Errors raised while building navigation trees or rendering helpers.
///
/// Configuration problems (`PartialNotConfigured`, `MalformedPartial`) and
/// malformed input (`UnknownPage`) abort a render.
/// `FilterUnavailable` is produced by collaborator factories; helpers log it
/// and continue as if the page was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Partial rendering requested without a script name.
    #[error("Unable to render partial: no partial view script provided")]
    PartialNotConfigured,

    /// Partial given as a list with the wrong number of elements.
    #[error("Unable to render partial: list must contain exactly 2 elements, got {len}")]
    MalformedPartial { len: usize },

    /// Page handle does not belong to the navigation tree.
    #[error("Page {0} does not exist in this navigation tree")]
    UnknownPage(PageId),

    /// Acceptance filter could not be constructed.
    #[error("Acceptance filter unavailable: {0}")]
    FilterUnavailable(String),

    /// Partial delegate failed.
    #[error("Template rendering failed: {0}")]
    Template(String),

    /// Navigation document could not be parsed.
    #[error("Failed to load navigation: {0}")]
    Load(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = NavigationError> = std::result::Result<T, E>;
