//! Error types for view tree operations.

use thiserror::Error;
use trellis_style::StyleError;

/// Errors raised by view lookups and style application.
///
/// Layout itself never fails: oversized edges clamp to zero and missing
/// style properties read as their defaults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// No view with this id exists in the searched subtree.
    #[error("View not found: {0}")]
    NotFound(String),

    /// A style declaration applied through a view was invalid.
    #[error(transparent)]
    Style(#[from] StyleError),
}

pub type Result<T> = std::result::Result<T, ViewError>;
