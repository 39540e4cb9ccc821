//! Error types for coupon code operations.
//!
//! This module provides a unified error type for generation, validation and
//! configuration, with specific variants for each failure mode. Validation
//! failures carry the canonical form of the rejected input so callers can
//! show the user what was parsed.

use thiserror::Error;

/// A specialized `Result` type for coupon code operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for coupon code operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Generator parameters are out of range
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidConfig {
        /// Configuration key
        key: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Normalized input does not split into the configured number of parts
    #[error("wrong number of parts in '{canonical}': expected {expected}, got {found}")]
    WrongPartCount {
        /// Best-effort canonical form of the input
        canonical: String,
        /// Configured number of parts
        expected: usize,
        /// Number of parts found
        found: usize,
    },

    /// A part does not have the configured length
    #[error("wrong length of part {part} in '{canonical}': expected {expected}, got {found}")]
    WrongPartLength {
        /// Best-effort canonical form of the input
        canonical: String,
        /// 1-based index of the part
        part: usize,
        /// Configured part length
        expected: usize,
        /// Actual part length
        found: usize,
    },

    /// A part's trailing symbol does not match its checksum
    #[error("wrong check character '{found}' in part {part} of '{canonical}' (expected '{expected}')")]
    WrongCheckCharacter {
        /// Best-effort canonical form of the input
        canonical: String,
        /// 1-based index of the part
        part: usize,
        /// Check character present in the input
        found: char,
        /// Check character computed from the part body
        expected: char,
    },

    /// Checksum computed over a symbol outside the alphabet (should not happen)
    #[error("symbol '{0}' is not part of the code alphabet")]
    UnknownSymbol(char),

    /// The bad word filter rejected every candidate for a part
    #[error("unable to generate part {part} after {attempts} attempts")]
    GenerationExhausted {
        /// 1-based index of the part that could not be generated
        part: usize,
        /// Number of candidates drawn
        attempts: usize,
    },

    /// Configuration file error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Returns the canonical form of the rejected input, for validation errors.
    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        match self {
            Self::WrongPartCount { canonical, .. }
            | Self::WrongPartLength { canonical, .. }
            | Self::WrongCheckCharacter { canonical, .. } => Some(canonical),
            _ => None,
        }
    }

    /// Returns whether this error is recoverable (the user can re-enter the code).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::WrongPartCount { .. }
                | Self::WrongPartLength { .. }
                | Self::WrongCheckCharacter { .. }
        )
    }

    /// Returns a helpful suggestion for resolving the error, if applicable.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::WrongPartCount { .. } | Self::WrongPartLength { .. } => Some(
                "Some characters are missing or extra. Check the code and type it again.",
            ),
            Self::WrongCheckCharacter { .. } => {
                Some("The code contains a typo. Check each character and type it again.")
            }
            Self::InvalidConfig { .. } => {
                Some("Codes need at least one part of at least two characters.")
            }
            Self::GenerationExhausted { .. } => Some(
                "The bad word list rejects too many codes. Shorten the list or raise max_attempts.",
            ),
            Self::ConfigError(_) => Some(
                "Fix or remove the configuration file:\n\
                   couponcode config path",
            ),
            _ => None,
        }
    }
}
