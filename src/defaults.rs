//! Default values for single-header configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Name of the configuration file looked up in the working directory.
///
/// This can be overridden by the `-c`/`--config` CLI flag or the
/// `SINGLE_HEADER_CONFIG` environment variable.
pub const CONFIG_FILE_NAME: &str = ".single-header.yaml";

/// Directory that include directives resolve against.
pub const INCLUDE_ROOT: &str = "include";

/// Literal prefix that marks a line as an internal include directive.
///
/// Only lines starting with this exact text are rewritten; angle-bracket
/// includes and indented quoted includes pass through untouched.
pub const DIRECTIVE_PREFIX: &str = "#include \"";

/// File names that are re-expanded on every reference instead of being
/// inlined once.
pub const MARKER_FILES: [&str; 2] = ["prologue.hpp", "epilogue.hpp"];

/// Returns the default marker file names as owned strings.
pub fn default_markers() -> Vec<String> {
    MARKER_FILES.iter().map(|name| name.to_string()).collect()
}
