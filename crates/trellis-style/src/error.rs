//! Error types for declaration parsing.
//!
//! Only the textual entry points can fail. Typed queries on a
//! [`Style`](crate::Style) never return errors: a missing property and a
//! property of the wrong kind both answer with the kind's default value.

use thiserror::Error;

/// Errors that can occur while turning declaration text into style values.
///
/// # Examples
///
/// ```rust
/// use trellis_style::{Style, StyleError};
///
/// let mut style = Style::new();
/// let result = style.set_declaration("no-such-property", "1px");
/// assert!(matches!(result, Err(StyleError::UnknownProperty(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// No parser is registered for the property name.
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// The property is known but the value text is not valid for it.
    #[error("Invalid value for {property}: {value}")]
    InvalidValue { property: String, value: String },

    /// A colour literal could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A declaration block could not be split into declarations.
    #[error("Declaration syntax error: {0}")]
    InvalidSyntax(String),
}

impl StyleError {
    pub(crate) fn invalid_value(property: &str, value: &str) -> Self {
        StyleError::InvalidValue {
            property: property.to_string(),
            value: value.trim().to_string(),
        }
    }
}
