//! Error types for widget and form rendering.
//!
//! This module provides [`RenderError`], the error type for every rendering
//! operation. Template engine errors are folded into it so the public API does
//! not leak minijinja types.

use std::fmt;

/// Error type for widget and form rendering operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A field descriptor is missing an attribute its kind requires.
    Configuration {
        /// Name of the offending field.
        field: String,
        /// The missing or inconsistent attribute.
        attribute: String,
    },

    /// A field value does not have the shape the widget expects.
    InvalidValue {
        /// Name of the offending field.
        field: String,
        /// What was wrong with the value.
        message: String,
    },

    /// Inline script template failed to render.
    Template(String),
}

impl RenderError {
    /// Creates a configuration error for `field` lacking `attribute`.
    pub fn configuration(field: impl Into<String>, attribute: impl Into<String>) -> Self {
        RenderError::Configuration {
            field: field.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid-value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        RenderError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Configuration { field, attribute } => {
                write!(
                    f,
                    "configuration error: field '{}' requires attribute '{}'",
                    field, attribute
                )
            }
            RenderError::InvalidValue { field, message } => {
                write!(f, "invalid value for field '{}': {}", field, message)
            }
            RenderError::Template(msg) => write!(f, "template error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_names_field_and_attribute() {
        let err = RenderError::configuration("role", "options");
        let msg = err.to_string();
        assert!(msg.contains("role"));
        assert!(msg.contains("options"));
    }

    #[test]
    fn test_from_minijinja_error() {
        let mj_err = minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "template 'md1/missing' not found",
        );
        let err: RenderError = mj_err.into();
        assert!(matches!(err, RenderError::Template(_)));
    }
}
