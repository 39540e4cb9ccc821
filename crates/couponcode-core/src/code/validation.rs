//! Normalization and validation of user-entered codes.
//!
//! Input goes through a fixed pipeline:
//!
//! 1. uppercase
//! 2. drop everything outside `0-9` and `A-Z` (separators, spaces, punctuation)
//! 3. read `O`, `I`, `Z`, `S` as `0`, `1`, `2`, `5`
//! 4. cut into parts of the configured length, keeping a short tail
//! 5. join with the separator to get the canonical form
//! 6. check the part count, then each part's length and check character
//!
//! The canonical form is available on success and on failure.

use std::sync::LazyLock;

use regex::Regex;

use super::alphabet::{self, SEPARATOR};
use super::generator::GeneratorConfig;
use super::Code;
use crate::error::{Error, Result};

static NON_CODE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Z]+").expect("static pattern is valid"));

/// Applies the case-fold, strip and disambiguation steps.
///
/// ```
/// use couponcode_core::code::normalize;
///
/// assert_eq!(normalize("ab1z - cd34"), "AB12CD34");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let upper: String = input.chars().map(upper_single).collect();
    NON_CODE_CHARS
        .replace_all(&upper, "")
        .chars()
        .map(|c| match c {
            'O' => '0',
            'I' => '1',
            'Z' => '2',
            'S' => '5',
            c => c,
        })
        .collect()
}

/// Uppercases `c` only when the mapping is a single character.
///
/// Characters like `ß` expand to several letters; those are kept as they are
/// and removed by the strip step, so they never shift part boundaries.
fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Splits normalized text into parts of `part_length` characters.
///
/// The last part is shorter when the length is not a multiple of `part_length`.
/// Normalized text is ASCII, so byte offsets are character offsets.
#[must_use]
pub fn split_parts(normalized: &str, part_length: usize) -> Vec<&str> {
    if part_length == 0 {
        return Vec::new();
    }
    normalized
        .as_bytes()
        .chunks(part_length)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect()
}

/// Joins parts with the separator.
pub(crate) fn join_parts(parts: &[&str]) -> String {
    let mut sep = [0u8; 4];
    parts.join(&*SEPARATOR.encode_utf8(&mut sep))
}

/// Normalizes and validates `input` against `config`.
///
/// Only the first failing part is reported.
///
/// # Errors
///
/// Returns [`Error::WrongPartCount`], [`Error::WrongPartLength`] or
/// [`Error::WrongCheckCharacter`], each carrying the canonical form.
pub fn validate(input: &str, config: &GeneratorConfig) -> Result<Code> {
    let normalized = normalize(input);
    let parts = split_parts(&normalized, config.part_length);
    let canonical = join_parts(&parts);

    if parts.len() != config.parts {
        return Err(Error::WrongPartCount {
            canonical,
            expected: config.parts,
            found: parts.len(),
        });
    }

    // Fail fast on the first bad part. A caller wanting every failing part
    // would need this loop to collect instead.
    for (i, part) in parts.iter().enumerate() {
        let position = i + 1;
        if part.len() != config.part_length {
            return Err(Error::WrongPartLength {
                canonical,
                part: position,
                expected: config.part_length,
                found: part.len(),
            });
        }

        let (body, check) = part.split_at(part.len() - 1);
        let expected = alphabet::check_character(body, position)?;
        let found = check.chars().next().unwrap_or_default();
        if found != expected {
            return Err(Error::WrongCheckCharacter {
                canonical,
                part: position,
                found,
                expected,
            });
        }
    }

    Ok(Code::new_unchecked(canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(parts: usize, part_length: usize) -> GeneratorConfig {
        GeneratorConfig {
            parts,
            part_length,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_normalize_case_and_strip() {
        assert_eq!(normalize("55au-8heh"), "55AU8HEH");
        assert_eq!(normalize("  55 AU / 8H.EH \n"), "55AU8HEH");
        assert_eq!(normalize("55\u{2014}AU\u{00e9}8HEH"), "55AU8HEH");
    }

    #[test]
    fn test_normalize_keeps_expanding_characters_out() {
        assert_eq!(normalize("55AU\u{df}8HEH"), "55AU8HEH");
        assert_eq!(normalize("\u{fb03}"), "");
        assert_eq!(normalize("a\u{fb03}b"), "AB");

        let code = validate("55au\u{df}8heh", &config(2, 4)).unwrap();
        assert_eq!(code.as_str(), "55AU-8HEH");
    }

    #[test]
    fn test_normalize_disambiguates() {
        assert_eq!(normalize("OIZS"), "0125");
        assert_eq!(normalize("oizs"), "0125");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_split_parts_keeps_short_tail() {
        assert_eq!(split_parts("55AU8HEH", 4), vec!["55AU", "8HEH"]);
        assert_eq!(split_parts("55AU8HE", 4), vec!["55AU", "8HE"]);
        assert_eq!(split_parts("", 4), Vec::<&str>::new());
    }

    #[test]
    fn test_validate_valid() {
        let code = validate("55AU-8HEH", &config(2, 4)).unwrap();
        assert_eq!(code.as_str(), "55AU-8HEH");

        let code = validate("ab1f cd3a", &config(2, 4)).unwrap();
        assert_eq!(code.as_str(), "AB1F-CD3A");
    }

    #[test]
    fn test_validate_confusable_letters() {
        let cfg = config(2, 4);
        assert_eq!(validate("ssau-8heh", &cfg).unwrap().as_str(), "55AU-8HEH");
        assert_eq!(validate("abif-cd3a", &cfg).unwrap().as_str(), "AB1F-CD3A");
        assert_eq!(validate("1k7q-qzx6", &cfg).unwrap().as_str(), "1K7Q-Q2X6");
        assert_eq!(validate("ooo8-oooG", &cfg).unwrap().as_str(), "0008-000G");
    }

    #[test]
    fn test_validate_wrong_part_count() {
        let err = validate("55AU", &config(2, 4)).unwrap_err();
        assert!(matches!(
            err,
            Error::WrongPartCount {
                expected: 2,
                found: 1,
                ..
            }
        ));
        assert_eq!(err.canonical(), Some("55AU"));

        let err = validate("55AU-8HEH-1111", &config(2, 4)).unwrap_err();
        assert!(matches!(err, Error::WrongPartCount { found: 3, .. }));

        let err = validate("", &config(2, 4)).unwrap_err();
        assert!(matches!(err, Error::WrongPartCount { found: 0, .. }));
        assert_eq!(err.canonical(), Some(""));
    }

    #[test]
    fn test_validate_short_last_part() {
        let err = validate("55AU-8HE", &config(2, 4)).unwrap_err();
        assert!(matches!(
            err,
            Error::WrongPartLength {
                part: 2,
                expected: 4,
                found: 3,
                ..
            }
        ));
        assert_eq!(err.canonical(), Some("55AU-8HE"));
    }

    #[test]
    fn test_validate_wrong_check_character() {
        let err = validate("55AU-8HEX", &config(2, 4)).unwrap_err();
        match err {
            Error::WrongCheckCharacter {
                canonical,
                part,
                found,
                expected,
            } => {
                assert_eq!(canonical, "55AU-8HEX");
                assert_eq!(part, 2);
                assert_eq!(found, 'X');
                assert_eq!(expected, 'H');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_reports_first_failure_only() {
        let err = validate("55AX-8HEX", &config(2, 4)).unwrap_err();
        assert!(matches!(err, Error::WrongCheckCharacter { part: 1, .. }));
    }

    #[test]
    fn test_swapped_parts_rejected() {
        assert!(validate("8HEH-55AU", &config(2, 4)).is_err());
    }
}
