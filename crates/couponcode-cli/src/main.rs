//! Couponcode CLI - checksummed, typo-resistant coupon codes
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate ten codes
//! couponcode generate -n 10
//!
//! # Check what a customer typed
//! couponcode validate "55au 8heh"
//! ```

#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::Parser;

mod commands;
pub mod ui;

use commands::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(args) => commands::generate::run(&args),
        Command::Validate(args) => commands::validate::run(&args),
        Command::Config(args) => commands::config::run(args.action),
        Command::Completions(args) => {
            commands::completions::run(args.shell);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose {
        "warn,couponcode=debug,couponcode_core=debug"
    } else {
        "warn,couponcode=info,couponcode_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
