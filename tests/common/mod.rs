//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures, helper functions, and macros
//! to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_sample_library();
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::headers;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Minimal valid configuration listing a single entry file.
    pub const MINIMAL: &str = r#"
entries:
  - include/mylib/mylib.hpp
"#;

    /// Configuration that also names the committed output file.
    pub const WITH_OUTPUT: &str = r#"
entries:
  - include/mylib/mylib.hpp
output: single_include/mylib.hpp
"#;

    /// Configuration with every field spelled out.
    pub const FULL: &str = r#"
include-root: include
prefix: '#include "'
markers:
  - prologue.hpp
  - epilogue.hpp
entries:
  - include/mylib/mylib.hpp
output: single_include/mylib.hpp
"#;

    /// Configuration with an empty entry list. Parses as YAML but fails
    /// validation.
    pub const NO_ENTRIES: &str = "entries: []\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "invalid: yaml: content:";
}

/// Header file contents for the sample library used across tests.
///
/// The library is small but exercises every amalgamation behavior: nested
/// includes, a shared dependency that must appear only once, and marker
/// files that repeat around every section.
#[allow(dead_code)]
pub mod headers {
    /// Umbrella header that pulls in the whole library.
    pub const MYLIB: &str = r#"#ifndef MYLIB_HPP
#define MYLIB_HPP
#include "mylib/core.hpp"
#include "mylib/util.hpp"
#endif
"#;

    /// Core module, wrapped in the prologue/epilogue markers.
    pub const CORE: &str = r#"#include "mylib/prologue.hpp"
int core();
#include "mylib/epilogue.hpp"
"#;

    /// Utility module that depends on core.
    pub const UTIL: &str = r#"#include "mylib/prologue.hpp"
#include "mylib/core.hpp"
int util();
#include "mylib/epilogue.hpp"
"#;

    /// Marker expanded at the top of every section.
    pub const PROLOGUE: &str = "#pragma push_macro(\"ASSERT\")\n";

    /// Marker expanded at the bottom of every section.
    pub const EPILOGUE: &str = "#pragma pop_macro(\"ASSERT\")\n";

    /// The expected amalgamated output for the sample library.
    ///
    /// The markers appear twice (once per wrapped module) while the second
    /// include of `core.hpp` is dropped by deduplication.
    pub const AMALGAMATED: &str = r#"#ifndef MYLIB_HPP
#define MYLIB_HPP
#pragma push_macro("ASSERT")
int core();
#pragma pop_macro("ASSERT")
#pragma push_macro("ASSERT")
int util();
#pragma pop_macro("ASSERT")
#endif
"#;
}

/// A test fixture that provides a temporary directory with optional config.
///
/// This struct simplifies the common pattern of creating a temp directory
/// and populating it with a `.single-header.yaml` configuration file and a
/// small header tree to amalgamate.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_sample_library()
///     .with_config(configs::MINIMAL);
///
/// fixture.command().arg("build").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.single-header.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".single-header.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add the minimal valid configuration.
    #[allow(dead_code)]
    pub fn with_minimal_config(self) -> Self {
        self.with_config(configs::MINIMAL)
    }

    /// Add a header file with the given path and content.
    pub fn with_header(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write header file");
        self
    }

    /// Add the five-file sample library under `include/mylib/`.
    pub fn with_sample_library(self) -> Self {
        self.with_header("include/mylib/mylib.hpp", headers::MYLIB)
            .with_header("include/mylib/core.hpp", headers::CORE)
            .with_header("include/mylib/util.hpp", headers::UTIL)
            .with_header("include/mylib/prologue.hpp", headers::PROLOGUE)
            .with_header("include/mylib/epilogue.hpp", headers::EPILOGUE)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".single-header.yaml")
    }

    /// Get access to the underlying TempDir for advanced usage.
    #[allow(dead_code)]
    pub fn temp_dir(&self) -> &assert_fs::TempDir {
        &self.temp_dir
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("single-header");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config("entries: []");
        assert!(fixture.config_path().exists());
    }

    #[test]
    fn test_fixture_with_sample_library() {
        let fixture = TestFixture::new().with_sample_library();
        assert!(fixture.path().join("include/mylib/mylib.hpp").exists());
        assert!(fixture.path().join("include/mylib/core.hpp").exists());
        assert!(fixture.path().join("include/mylib/epilogue.hpp").exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        // Verify that our config constants are valid YAML
        let configs = [
            configs::MINIMAL,
            configs::WITH_OUTPUT,
            configs::FULL,
            configs::NO_ENTRIES,
        ];

        for config in configs {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }

    #[test]
    fn test_amalgamated_reference_has_expected_shape() {
        assert_eq!(headers::AMALGAMATED.lines().count(), 9);
        assert!(headers::AMALGAMATED.ends_with('\n'));
        // Deduplication leaves exactly one copy of the core declaration.
        assert_eq!(headers::AMALGAMATED.matches("int core();").count(), 1);
    }
}
