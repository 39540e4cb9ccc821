//! Generate command implementation.

use anyhow::{Context, Result};
use couponcode_core::code::{Code, Generator, RngSource, SymbolSource};
use couponcode_core::config::Config;

use super::GenerateArgs;
use crate::ui::{describe_shape, CodeBox};

/// Run the generate command.
pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = effective_config(super::load_config(), args);
    let generator = config
        .generator()
        .context("Invalid code shape. Parts need at least 2 characters.")?;

    let codes = generate_codes(&generator, args.count, args.seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else if args.quiet || codes.len() > 1 {
        for code in &codes {
            println!("{}", code);
        }
    } else if let Some(code) = codes.first() {
        let shape = describe_shape(config.code.parts, config.code.part_length);
        println!();
        CodeBox::new(code.as_str()).with_caption(&shape).display();
        println!();
    }

    Ok(())
}

/// Apply command line overrides on top of the loaded configuration.
fn effective_config(mut config: Config, args: &GenerateArgs) -> Config {
    args.shape.apply(&mut config.code);
    if let Some(max_attempts) = args.max_attempts {
        config.code.max_attempts = Some(max_attempts);
    }
    if args.no_bad_words {
        config.bad_words.builtin = false;
        config.bad_words.extra.clear();
    }
    config.bad_words.extra.extend(args.bad_words.iter().cloned());
    config
}

fn generate_codes(generator: &Generator, count: usize, seed: Option<u64>) -> Result<Vec<Code>> {
    let mut source: Box<dyn SymbolSource> = match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };

    tracing::debug!(count, ?seed, config = ?generator.config(), "generating codes");

    (0..count)
        .map(|i| {
            generator
                .generate_with(source.as_mut())
                .with_context(|| format!("Failed to generate code {} of {}", i + 1, count))
        })
        .collect()
}
