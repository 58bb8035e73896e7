//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `single-header` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! The `Error` enum covers:
//!
//! - Missing include targets and entry files.
//! - Malformed include directives.
//! - Configuration parsing errors.
//! - I/O errors.
//! - YAML parsing errors.
//!
//! Every error is fatal: amalgamation aborts on the first failure and no
//! output is written, so a failed run never leaves a truncated header
//! behind. To make that abort actionable, each variant carries the context
//! needed to locate the problem - a missing include names the file and line
//! that referenced it, and a malformed directive quotes the offending line.

use thiserror::Error;

/// Main error type for single-header operations
#[derive(Error, Debug)]
pub enum Error {
    /// A resolved include target (or an entry file) does not exist on disk.
    ///
    /// Includes the resolved path and, when the file was reached through an
    /// include directive, the `file:line` location of that directive.
    #[error("File not found: {path}{}", referenced_from.as_ref().map(|r| format!("\n  referenced from: {}", r)).unwrap_or_default())]
    FileNotFound {
        path: String,
        /// Location of the directive that referenced the missing file, if
        /// any. Entry files have no referrer.
        referenced_from: Option<String>,
    },

    /// A line starts with the include prefix but cannot be parsed into a
    /// valid include path.
    ///
    /// Includes the location of the offending line, the line itself, and the
    /// specific parsing issue.
    #[error("Malformed include directive at {file}:{line}: {reason}\n  {content}")]
    MalformedDirective {
        file: String,
        line: usize,
        content: String,
        reason: String,
    },

    /// An error occurred while parsing the `.single-header.yaml`
    /// configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
