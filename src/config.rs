//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `.single-header.yaml` configuration file, as well as the logic for
//! parsing and validating it.
//!
//! ## Key Components
//!
//! - **`Config`**: The top-level schema - where includes resolve, what a
//!   directive looks like, which files are markers, which entries to
//!   amalgamate, and where the output goes.
//!
//! - **`parse` / `from_file`**: Entry points that deserialize the YAML and
//!   run semantic validation, so a `Config` in hand is always usable.
//!
//! ## Example
//!
//! ```yaml
//! include-root: include
//! prefix: '#include "'
//! markers:
//!   - prologue.hpp
//!   - epilogue.hpp
//! entries:
//!   - include/mylib/mylib.hpp
//! output: single_include/mylib.hpp
//! ```
//!
//! Only `entries` is required. Every other key has a default, shown above.
//! Relative paths resolve against the directory the tool runs in.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// The `.single-header.yaml` configuration schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The directory that include directives resolve against.
    #[serde(default = "default_include_root", rename = "include-root")]
    pub include_root: PathBuf,

    /// The literal prefix that marks a line as an internal include
    /// directive. Lines not starting with this exact text pass through
    /// unchanged.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// File names that are re-expanded on every reference instead of being
    /// inlined once. Matched against the final path component only.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    /// The entry files to amalgamate, expanded in order into one output.
    pub entries: Vec<PathBuf>,

    /// The file the merged header is written to. When absent, output goes
    /// to stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_include_root() -> PathBuf {
    PathBuf::from(defaults::INCLUDE_ROOT)
}

fn default_prefix() -> String {
    defaults::DIRECTIVE_PREFIX.to_string()
}

fn default_markers() -> Vec<String> {
    defaults::default_markers()
}

/// Parses a YAML string into a validated `Config`.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml_content)?;
    validate(&config)?;
    Ok(config)
}

/// Reads and parses a configuration file.
pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

/// Semantic validation beyond what the deserializer enforces.
fn validate(config: &Config) -> Result<()> {
    if config.entries.is_empty() {
        return Err(Error::ConfigParse {
            message: "'entries' must list at least one entry file".to_string(),
            hint: Some(
                "Add the header that includes everything else, e.g. include/mylib/mylib.hpp"
                    .to_string(),
            ),
        });
    }

    if config.prefix.is_empty() {
        return Err(Error::ConfigParse {
            message: "'prefix' must not be empty".to_string(),
            hint: Some("The default prefix is '#include \"'".to_string()),
        });
    }

    for marker in &config.markers {
        if marker.is_empty() {
            return Err(Error::ConfigParse {
                message: "'markers' must not contain empty names".to_string(),
                hint: Some("Remove the empty list item or name a file, e.g. prologue.hpp".to_string()),
            });
        }
        if marker.contains('/') {
            return Err(Error::ConfigParse {
                message: format!("marker '{}' must be a bare file name", marker),
                hint: Some(
                    "Markers are matched against the final path component; drop the directories"
                        .to_string(),
                ),
            });
        }
    }

    Ok(())
}
