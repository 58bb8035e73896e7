//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which verifies that the
//! committed single header is up to date with the sources it was merged
//! from.
//!
//! ## Functionality
//!
//! - **Drift Detection**: Re-runs the amalgamation in memory and compares
//!   the result against the configured output file, byte for byte.
//! - **Exit Codes**: Returns 0 when the file is current, 1 when it is
//!   missing or stale - making the command suitable as a CI gate.
//!
//! This command is a safe, read-only operation that does not modify any
//! files.

use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use single_header::amalgamate::{render, Amalgamator};
use single_header::config;
use single_header::output::OutputConfig;
use single_header::suggestions;

/// Verify the committed single header is up to date
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the .single-header.yaml configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = ".single-header.yaml",
        env = "SINGLE_HEADER_CONFIG"
    )]
    pub config: PathBuf,

    /// Output file to compare against (defaults to the config's `output`)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `check` command.
///
/// Amalgamates the configured entries in memory and compares the result
/// with the output file on disk. Returns an error (exit code 1) when the
/// file is missing or differs.
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    let config_path = &args.config;
    if !config_path.exists() {
        return Err(suggestions::config_not_found(config_path));
    }
    let config = config::from_file(config_path)?;

    let output_path = match args.output.or(config.output) {
        Some(path) => path,
        None => return Err(suggestions::no_output_configured()),
    };
    if !output_path.exists() {
        return Err(suggestions::output_missing(&output_path));
    }

    let amalgamator = Amalgamator::new(config.include_root, config.prefix, config.markers);
    let lines = amalgamator.amalgamate_all(&config.entries)?;
    let expected = render(&lines);
    let actual = fs::read_to_string(&output_path)?;

    if expected == actual {
        if !args.quiet {
            println!(
                "{} {} is up to date",
                out.emoji("✅", "[OK]"),
                output_path.display()
            );
        }
        return Ok(());
    }

    if !args.quiet {
        println!(
            "{} {} is out of date",
            out.emoji("❌", "[ERR]"),
            output_path.display()
        );
        report_drift(&expected, &actual);
    }

    Err(suggestions::output_drift(&output_path))
}

/// Print a short description of where the file diverges.
fn report_drift(expected: &str, actual: &str) {
    for line in drift_summary(expected, actual) {
        println!("   {}", line);
    }
}

/// Describe where the rendered output and the on-disk file diverge.
fn drift_summary(expected: &str, actual: &str) -> Vec<String> {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut summary = vec![format!(
        "expected {} line(s), found {}",
        expected_lines.len(),
        actual_lines.len()
    )];

    for (index, (want, got)) in expected_lines.iter().zip(actual_lines.iter()).enumerate() {
        if want != got {
            summary.push(format!("first difference at line {}:", index + 1));
            summary.push(format!("  expected: {}", want));
            summary.push(format!("  found:    {}", got));
            return summary;
        }
    }

    if expected_lines.len() == actual_lines.len() {
        // Same lines but different bytes: the divergence is in the line
        // endings, not the content.
        if actual.ends_with('\n') {
            summary.push("lines match, but the line endings differ".to_string());
        } else {
            summary.push("lines match, but the trailing newline is missing".to_string());
        }
        return summary;
    }

    // One file is a prefix of the other.
    summary.push(format!(
        "files agree up to line {}, then one ends",
        expected_lines.len().min(actual_lines.len())
    ));
    summary
}
