//! Code generation with bad word rejection.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::alphabet::{self, SYMBOLS};
use super::filter::{BadWordFilter, BadWords};
use super::source::{RngSource, SymbolSource};
use super::{validation, Code};
use crate::error::{Error, Result};

/// Default number of parts in a code.
pub const DEFAULT_PARTS: usize = 2;

/// Default part length, check character included.
pub const DEFAULT_PART_LENGTH: usize = 4;

/// Default number of candidates drawn for one part before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Shape of the codes a [`Generator`] produces and accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of separator-joined parts
    pub parts: usize,
    /// Characters per part, including the trailing check character
    pub part_length: usize,
    /// Candidates drawn per part before failing; `None` retries forever
    pub max_attempts: Option<NonZeroUsize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            parts: DEFAULT_PARTS,
            part_length: DEFAULT_PART_LENGTH,
            max_attempts: NonZeroUsize::new(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl GeneratorConfig {
    /// Check that the shape can hold at least one body character and a check character.
    pub fn validate(&self) -> Result<()> {
        if self.parts == 0 {
            return Err(Error::InvalidConfig {
                key: "parts".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.part_length < 2 {
            return Err(Error::InvalidConfig {
                key: "part_length".to_string(),
                reason: format!("must be at least 2, got {}", self.part_length),
            });
        }
        if self.parts.checked_mul(self.part_length).is_none() {
            return Err(Error::InvalidConfig {
                key: "parts".to_string(),
                reason: format!(
                    "{} parts of {} characters is too long",
                    self.parts, self.part_length
                ),
            });
        }
        Ok(())
    }
}

/// Generates and validates codes of one configured shape.
#[derive(Clone)]
pub struct Generator {
    config: GeneratorConfig,
    filter: Arc<dyn BadWordFilter>,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            filter: Arc::new(BadWords::builtin()),
        }
    }
}

impl Generator {
    /// Create a generator for `parts` parts of `part_length` characters.
    ///
    /// Uses the built-in bad word list and the default attempt cap.
    pub fn new(parts: usize, part_length: usize) -> Result<Self> {
        Self::with_config(GeneratorConfig {
            parts,
            part_length,
            ..GeneratorConfig::default()
        })
    }

    /// Create a generator from a full configuration.
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Replace the bad word filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl BadWordFilter + 'static) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    /// Set the per-part attempt cap. `None` retries forever.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<NonZeroUsize>) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// The configured code shape.
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a code using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GenerationExhausted`] if the filter rejects every
    /// candidate for one part within the attempt cap.
    pub fn generate(&self) -> Result<Code> {
        self.generate_with(&mut RngSource::thread())
    }

    /// Generate a code drawing symbols from `source`.
    ///
    /// Each part is a random body followed by its check character. After
    /// each draw, the whole code so far is run through the filter, since a bad
    /// word can span two parts. A rejected draw is replaced; earlier parts are kept.
    pub fn generate_with<S: SymbolSource + ?Sized>(&self, source: &mut S) -> Result<Code> {
        let GeneratorConfig {
            parts,
            part_length,
            max_attempts,
        } = self.config;
        let mut accepted = String::new();

        for index in 0..parts {
            let position = index + 1;
            let mut attempts = 0usize;
            loop {
                if let Some(max) = max_attempts {
                    if attempts >= max.get() {
                        tracing::warn!(
                            part = position,
                            attempts,
                            "bad word filter rejected every candidate"
                        );
                        return Err(Error::GenerationExhausted {
                            part: position,
                            attempts,
                        });
                    }
                }
                attempts += 1;

                let body: String = (0..part_length - 1)
                    .map(|_| alphabet::symbol_at(source.next_index(SYMBOLS.len())))
                    .collect();
                let check = alphabet::check_character(&body, position)?;

                let prefix_len = accepted.len();
                accepted.push_str(&body);
                accepted.push(check);

                if !self.filter.contains_bad_word(&accepted) {
                    break;
                }
                tracing::debug!(
                    part = position,
                    candidate = %&accepted[prefix_len..],
                    "rejected candidate part"
                );
                accepted.truncate(prefix_len);
            }
        }

        let joined = split_joined(&accepted, part_length);
        Ok(Code::new_unchecked(joined))
    }

    /// Normalize and validate user input against this generator's shape.
    ///
    /// # Errors
    ///
    /// See [`validation::validate`].
    pub fn validate(&self, input: &str) -> Result<Code> {
        validation::validate(input, &self.config)
    }
}

fn split_joined(flat: &str, part_length: usize) -> String {
    validation::join_parts(&validation::split_parts(flat, part_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::filter::NoFilter;
    use crate::code::source::SequenceSource;

    #[test]
    fn test_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.parts, 2);
        assert_eq!(config.part_length, 4);
        assert_eq!(config.max_attempts.map(NonZeroUsize::get), Some(10_000));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Generator::new(0, 4),
            Err(Error::InvalidConfig { ref key, .. }) if key == "parts"
        ));
        assert!(matches!(
            Generator::new(2, 1),
            Err(Error::InvalidConfig { ref key, .. }) if key == "part_length"
        ));
        assert!(Generator::new(2, 0).is_err());
        assert!(Generator::new(1, 2).is_ok());
    }

    #[test]
    fn test_oversized_config_rejected() {
        assert!(matches!(
            Generator::new(usize::MAX, 2),
            Err(Error::InvalidConfig { ref key, .. }) if key == "parts"
        ));
        assert!(Generator::new(2, usize::MAX).is_err());

        let config = GeneratorConfig {
            parts: usize::MAX / 2 + 1,
            part_length: 2,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generate_from_sequence() {
        let generator = Generator::new(2, 4).unwrap().with_filter(NoFilter);
        let mut source = SequenceSource::from_symbols("55A8HE").unwrap();
        let code = generator.generate_with(&mut source).unwrap();
        assert_eq!(code.as_str(), "55AU-8HEH");
    }

    #[test]
    fn test_generate_shape() {
        let generator = Generator::new(3, 5).unwrap();
        let code = generator.generate().unwrap();
        let parts: Vec<_> = code.parts().collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 5));
    }

    #[test]
    fn test_rejected_part_is_redrawn() {
        // First draw for part 2 spells 8HEH and is rejected; the next draw is kept.
        let generator = Generator::new(2, 4)
            .unwrap()
            .with_filter(BadWords::new(["8HEH"]));
        let mut source = SequenceSource::from_symbols("55A8HE123").unwrap();
        let code = generator.generate_with(&mut source).unwrap();
        assert_eq!(code.as_str(), "55AU-123F");
    }

    #[test]
    fn test_filter_sees_whole_prefix() {
        // "U8" only exists across the part boundary.
        let generator = Generator::new(2, 4)
            .unwrap()
            .with_filter(BadWords::new(["U8"]));
        let mut source = SequenceSource::from_symbols("55A8HE123").unwrap();
        let code = generator.generate_with(&mut source).unwrap();
        assert_eq!(code.as_str(), "55AU-123F");
    }

    #[test]
    fn test_generation_exhausted() {
        let generator = Generator::new(2, 4)
            .unwrap()
            .with_filter(|text: &str| text.len() > 4)
            .with_max_attempts(NonZeroUsize::new(25));
        let err = generator
            .generate_with(&mut RngSource::seeded(7))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::GenerationExhausted {
                part: 2,
                attempts: 25
            }
        ));
    }

    #[test]
    fn test_generated_code_validates() {
        let generator = Generator::default();
        let mut source = RngSource::seeded(1);
        for _ in 0..200 {
            let code = generator.generate_with(&mut source).unwrap();
            assert_eq!(generator.validate(code.as_str()).unwrap(), code);
        }
    }
}
