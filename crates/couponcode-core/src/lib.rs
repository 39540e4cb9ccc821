//! # Couponcode Core Library
//!
//! `couponcode-core` generates and validates short, human-typable codes
//! such as `55AU-8HEH`.
//!
//! ## Features
//!
//! - **Check characters**: every part ends in a checksum over the part and its
//!   position, so a typo is reported instead of matching another code
//! - **Forgiving input**: case, spacing, punctuation and the look-alike letters
//!   `O`, `I`, `Z`, `S` are normalized away before checking
//! - **Bad word filtering**: generated codes never contain a listed word, even
//!   across part boundaries
//! - **Pluggable randomness**: deterministic sources for reproducible output
//!
//! ## Modules
//!
//! - [`code`] - Code generation, normalization and validation
//! - [`config`] - Configuration management
//! - [`error`] - Error type
//!
//! ## Example
//!
//! ```rust
//! let code = couponcode_core::generate()?;
//! let checked = couponcode_core::validate(&code.as_str().to_lowercase())?;
//! assert_eq!(checked, code);
//! # Ok::<(), couponcode_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]

pub mod code;
pub mod config;
pub mod error;

pub use code::{generate, validate, Code, Generator, GeneratorConfig};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
