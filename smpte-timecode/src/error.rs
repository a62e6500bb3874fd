//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
///
/// Out-of-range components (for example `seconds = 99`) are not errors: they are
/// folded into the frame count when a timecode is built from components.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// The input string is not shaped like `HH:MM:SS:FF` or `HH:MM:SS;FF`.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// The rate label is not one of the registered labels.
    #[error("Unknown frame rate: {label:?}")]
    UnknownRate {
        /// The label that was looked up.
        label: String,
    },

    /// A rate descriptor that breaks the rate contract.
    #[error("Invalid frame rate: nominal {nominal}, drop {drop}, {numerator}/{denominator}")]
    InvalidRate {
        /// Nominal integer frames per second.
        nominal: u32,
        /// Frame numbers skipped per drop incident.
        drop: u32,
        /// True rate numerator.
        numerator: u32,
        /// True rate denominator.
        denominator: u32,
    },

    /// The frame count does not fit an `i64`.
    #[error("Timecode overflow")]
    Overflow,
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an unknown rate error.
    pub fn unknown_rate(label: impl Into<String>) -> Self {
        Self::UnknownRate {
            label: label.into(),
        }
    }

    /// Create an invalid rate error.
    pub fn invalid_rate(nominal: u32, drop: u32, numerator: u32, denominator: u32) -> Self {
        Self::InvalidRate {
            nominal,
            drop,
            numerator,
            denominator,
        }
    }
}
