//! Client-side validation of custom extension input
//!
//! Rules run in a fixed order and only the first violation is reported:
//! empty, then length, then format, then count.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::UiLimits;
use crate::messages::Message;

static EXTENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").expect("static pattern is valid"));

/// A rejected custom extension candidate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("extension is empty")]
    EmptyInput,

    #[error("extension exceeds {max} characters")]
    TooLong { max: usize },

    #[error("extension must contain only lowercase letters and digits")]
    InvalidFormat,

    #[error("custom extension limit of {max} reached")]
    CountExceeded { max: usize },
}

impl ValidationError {
    /// The user-facing message for this error
    pub fn message(&self) -> Message {
        match *self {
            Self::EmptyInput => Message::EmptyInput,
            Self::TooLong { max } => Message::TooLong { max },
            Self::InvalidFormat => Message::InvalidFormat,
            Self::CountExceeded { max } => Message::CountExceeded { max },
        }
    }
}

/// Trim and lowercase a raw input
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Validate a candidate extension, returning its normalized form
///
/// `current_count` is the length of the most recently fetched custom list.
pub fn validate(
    input: &str,
    limits: &UiLimits,
    current_count: usize,
) -> Result<String, ValidationError> {
    let extension = normalize(input);

    if extension.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if extension.chars().count() > limits.max_length {
        return Err(ValidationError::TooLong {
            max: limits.max_length,
        });
    }

    if !EXTENSION_PATTERN.is_match(&extension) {
        return Err(ValidationError::InvalidFormat);
    }

    if current_count >= limits.max_count {
        return Err(ValidationError::CountExceeded {
            max: limits.max_count,
        });
    }

    Ok(extension)
}
