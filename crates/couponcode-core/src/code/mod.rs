//! Coupon code generation and validation.
//!
//! ## Code Format
//!
//! Codes use a 32-character alphabet that excludes letters easily confused
//! with digits:
//! - Valid characters: `0-9`, `A-H`, `J-N`, `P-R`, `T-Y`
//! - Excluded: `I`, `O`, `S`, `Z` (read back as `1`, `0`, `5`, `2`)
//!
//! A code is a number of parts joined by `-`. The last character of each part
//! is a check character over the rest of the part and the part's position, so
//! most typos produce an invalid code rather than a different valid one.
//!
//! ## Example
//!
//! ```rust
//! use couponcode_core::code::{Generator, SequenceSource};
//! use couponcode_core::code::filter::NoFilter;
//!
//! let generator = Generator::new(2, 4)?.with_filter(NoFilter);
//! let code = generator.generate_with(&mut SequenceSource::from_symbols("55A8HE")?)?;
//! assert_eq!(code.as_str(), "55AU-8HEH");
//!
//! let code = generator.validate("55au 8heh")?;
//! assert_eq!(code.to_string(), "55AU-8HEH");
//! # Ok::<(), couponcode_core::Error>(())
//! ```

pub mod alphabet;
pub mod filter;
pub mod generator;
pub mod source;
pub mod validation;

use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use alphabet::{check_character, index_of, SEPARATOR, SYMBOLS};
pub use filter::{BadWordFilter, BadWords, NoFilter};
pub use generator::{Generator, GeneratorConfig};
pub use source::{RngSource, SequenceSource, SymbolSource};
pub use validation::normalize;

use crate::error::{Error, Result};

static DEFAULT_GENERATOR: LazyLock<Generator> = LazyLock::new(Generator::default);

/// Generate a code of two four-character parts, avoiding the built-in bad words.
pub fn generate() -> Result<Code> {
    DEFAULT_GENERATOR.generate()
}

/// Normalize and validate a code of two four-character parts.
pub fn validate(input: &str) -> Result<Code> {
    DEFAULT_GENERATOR.validate(input)
}

/// A validated code in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    code: String,
}

impl Code {
    pub(crate) const fn new_unchecked(code: String) -> Self {
        Self { code }
    }

    /// Parse and validate a code with the default two-by-four shape.
    pub fn parse(input: &str) -> Result<Self> {
        validate(input)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Iterate over the parts of the code.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.code.split(SEPARATOR)
    }

    /// The code without separators.
    #[must_use]
    pub fn compact(&self) -> String {
        self.parts().collect()
    }

    /// Consume the code, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.code
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
