//! # Single Header Library
//!
//! This library provides the core functionality for merging a multi-file,
//! header-only C/C++ library into one self-contained header. It is designed
//! to be used by the `single-header` command-line tool but can also be
//! integrated into other applications that need include amalgamation.
//!
//! ## Quick Example
//!
//! ```
//! use single_header::config;
//! use single_header::directive;
//! use std::path::Path;
//!
//! // Parse a configuration
//! let config_yaml = r#"
//! entries:
//!   - include/mylib/mylib.hpp
//! "#;
//! let config = config::parse(config_yaml).unwrap();
//! assert_eq!(config.include_root, Path::new("include"));
//! assert_eq!(config.prefix, "#include \"");
//!
//! // Scan a line for an internal include directive
//! let line = r#"#include "mylib/detail/ops.hpp""#;
//! let parsed = directive::scan_line(line, &config.prefix, Path::new("mylib.hpp"), 1)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(parsed.file_name(), "ops.hpp");
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Configuration (`config`)**: Defines the schema for `.single-header.yaml`
//!   files - include root, directive prefix, marker files, entries, and the
//!   output target.
//! - **Directives (`directive`)**: Recognizes and parses the internal include
//!   lines that get replaced by the referenced file's contents.
//! - **Amalgamation (`amalgamate`)**: The depth-first, de-duplicating
//!   expansion engine that produces the merged header.
//! - **Graph Inspection (`graph`)**: Walks the include graph without
//!   producing output, powering the `tree` command.
//!
//! ## Execution Flow
//!
//! A `build` run executes the following high-level steps:
//!
//! 1.  **Configuration**: Load `.single-header.yaml` (or take entries from
//!     the command line) and merge in any flag overrides.
//! 2.  **Expansion**: Amalgamate the entries in order, sharing one visited
//!     set so nothing is inlined twice across the whole run.
//! 3.  **Rendering**: Join the merged lines into the final text.
//! 4.  **Output**: Write the result to the configured file, or to stdout.
//!
//! Expansion is all-or-nothing: any missing file or malformed directive
//! aborts the run before the output step, so a failed build never leaves a
//! partial header behind.

pub mod amalgamate;
pub mod config;
pub mod defaults;
pub mod directive;
pub mod error;
pub mod graph;
pub mod output;
pub mod suggestions;

#[cfg(test)]
mod directive_proptest;
