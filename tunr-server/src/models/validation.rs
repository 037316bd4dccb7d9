//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required form field was not submitted
    Missing { field: String },

    /// Body could not be decoded as the expected form
    Malformed { reason: String },
}

impl ValidationError {
    /// Classify a form deserialization failure by its message.
    ///
    /// serde reports absent fields as "missing field `name`"; any other
    /// wording is treated as malformed.
    pub fn from_form_error(message: &str) -> Self {
        let field = message
            .split("missing field `")
            .nth(1)
            .and_then(|rest| rest.split('`').next());

        match field {
            Some(field) => Self::Missing {
                field: field.to_owned(),
            },
            None => Self::Malformed {
                reason: message.to_owned(),
            },
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Malformed { reason } => write!(f, "malformed form: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
