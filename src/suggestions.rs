//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Configuration file not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::config_not_found(path));
//! ```

use std::path::Path;

/// Generate an error for when the configuration file is not found.
///
/// Includes hints about:
/// - Creating a new config file with `init`
/// - Using the -c/--config flag
/// - Using the SINGLE_HEADER_CONFIG environment variable
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Run 'single-header init' to create a .single-header.yaml file\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set SINGLE_HEADER_CONFIG environment variable",
        path = path.display()
    )
}

/// Generate an error for when `check` has no output file to compare.
///
/// Includes hints about configuring or passing the output path.
pub fn no_output_configured() -> anyhow::Error {
    anyhow::anyhow!(
        "No output file to check against\n\n\
         hint: Add 'output:' to .single-header.yaml\n\
         hint: Use -o/--output to name the file to compare"
    )
}

/// Generate an error for when the output file to check does not exist yet.
pub fn output_missing(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Output file not found: {path}\n\n\
         hint: Run 'single-header build' to create it",
        path = path.display()
    )
}

/// Generate an error for when the output file is stale.
///
/// Used by `check` to fail CI runs with a pointer at the fix.
pub fn output_drift(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Output file is out of date: {path}\n\n\
         hint: Run 'single-header build' to regenerate it, then commit the result",
        path = path.display()
    )
}
