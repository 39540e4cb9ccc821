//! Validate command implementation.

use anyhow::{bail, Context, Result};
use couponcode_core::Generator;
use serde::Serialize;

use super::ValidateArgs;

/// Outcome of checking one input, as reported to the user.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Report {
    input: String,
    canonical: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'static str>,
}

/// Run the validate command.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let mut config = super::load_config();
    args.shape.apply(&mut config.code);
    let generator = Generator::with_config(config.code).context("Invalid code shape")?;

    let reports: Vec<Report> = args.codes.iter().map(|c| check(&generator, c)).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        bail!("{} of {} codes are invalid", invalid, reports.len());
    }
    Ok(())
}

fn check(generator: &Generator, input: &str) -> Report {
    match generator.validate(input) {
        Ok(code) => Report {
            input: input.to_string(),
            canonical: code.into_string(),
            valid: true,
            error: None,
            suggestion: None,
        },
        Err(e) => {
            tracing::debug!(input, error = %e, "code rejected");
            Report {
                input: input.to_string(),
                canonical: e.canonical().unwrap_or_default().to_string(),
                valid: false,
                error: Some(e.to_string()),
                suggestion: e.suggestion(),
            }
        }
    }
}

fn print_report(report: &Report) {
    if report.valid {
        println!("  OK       {}", report.canonical);
        return;
    }

    println!("  INVALID  {}", report.canonical);
    if let Some(error) = &report.error {
        println!("           {}", error);
    }
    if let Some(suggestion) = report.suggestion {
        println!("           {}", suggestion);
    }
}
