//! Common test utilities for couponcode integration tests.

#![allow(dead_code)]

use couponcode_core::code::{Code, Generator, RngSource, SYMBOLS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG so sampled properties are reproducible.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate `count` codes from a seeded source.
pub fn sample_codes(generator: &Generator, seed: u64, count: usize) -> Vec<Code> {
    let mut source = RngSource::seeded(seed);
    (0..count)
        .map(|_| {
            generator
                .generate_with(&mut source)
                .expect("generation should succeed")
        })
        .collect()
}

/// Replace the character at byte `index` with a different alphabet symbol.
pub fn mutate_at(code: &str, index: usize, rng: &mut impl Rng) -> String {
    let original = code.as_bytes()[index];
    let replacement = loop {
        let candidate = SYMBOLS[rng.gen_range(0..SYMBOLS.len())];
        if candidate != original {
            break candidate;
        }
    };
    let mut bytes = code.as_bytes().to_vec();
    bytes[index] = replacement;
    String::from_utf8(bytes).expect("alphabet is ASCII")
}

/// Insert random whitespace and punctuation between characters and lowercase them.
pub fn scramble_format(code: &str, rng: &mut impl Rng) -> String {
    const NOISE: &[&str] = &["", " ", "-", "  ", ".", "_", "\t", "/"];
    let mut out = String::new();
    for c in code.chars().filter(|&c| c != '-') {
        out.push_str(NOISE[rng.gen_range(0..NOISE.len())]);
        out.push(c.to_ascii_lowercase());
    }
    out
}
