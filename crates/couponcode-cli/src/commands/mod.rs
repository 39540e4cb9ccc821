//! CLI command definitions and handlers.

use std::num::NonZeroUsize;

use clap::{Parser, Subcommand, ValueEnum};

/// Load configuration with graceful fallback to defaults.
///
/// A broken config file is reported and otherwise ignored, so a bad edit
/// never blocks validating a code.
pub fn load_config() -> couponcode_core::config::Config {
    couponcode_core::config::Config::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring configuration: {e}");
        couponcode_core::config::Config::default()
    })
}

pub mod completions;
pub mod config;
pub mod generate;
pub mod validate;

/// Couponcode - checksummed, typo-resistant coupon codes
#[derive(Parser)]
#[command(name = "couponcode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Detailed logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Generate new codes
    Generate(GenerateArgs),

    /// Normalize and check codes
    Validate(ValidateArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Code shape overrides shared by generate and validate
#[derive(Parser, Clone, Copy)]
pub struct ShapeArgs {
    /// Number of parts (overrides config)
    #[arg(long)]
    pub parts: Option<usize>,

    /// Characters per part, check character included (overrides config)
    #[arg(long)]
    pub part_length: Option<usize>,
}

/// Arguments for the generate command
#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of codes to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Code shape
    #[command(flatten)]
    pub shape: ShapeArgs,

    /// Do not filter bad words
    #[arg(long)]
    pub no_bad_words: bool,

    /// Additional word to avoid (repeatable)
    #[arg(long = "bad-word", value_name = "WORD")]
    pub bad_words: Vec<String>,

    /// Candidates drawn per part before giving up
    #[arg(long)]
    pub max_attempts: Option<NonZeroUsize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Minimal output (one code per line)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the validate command
#[derive(Parser)]
pub struct ValidateArgs {
    /// Codes to check, as typed
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Code shape
    #[command(flatten)]
    pub shape: ShapeArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Parser)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Clone, Copy)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for the completions command
#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: ShellType,
}

/// Supported shell types for completions
#[derive(Clone, Copy, ValueEnum, Debug)]
pub enum ShellType {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl ShapeArgs {
    /// Apply the overrides to a configured shape.
    pub fn apply(self, config: &mut couponcode_core::GeneratorConfig) {
        if let Some(parts) = self.parts {
            config.parts = parts;
        }
        if let Some(part_length) = self.part_length {
            config.part_length = part_length;
        }
    }
}
