//! # Include Directive Parsing
//!
//! This module recognizes and parses internal include directives - the lines
//! of a header file that pull in another header from the same library and
//! get replaced by that header's contents during amalgamation.
//!
//! ## Recognition Rules
//!
//! A line is an internal include directive if and only if it starts with the
//! configured prefix (by default `#include "`). Matching is intentionally
//! literal:
//!
//! - Indented includes do not match and pass through unchanged.
//! - Angle-bracket includes (`#include <vector>`) never match.
//! - Commented-out includes (`// #include "..."`) never match.
//!
//! The quoted path runs from the end of the prefix to the next `"`. Anything
//! after the closing quote (typically a trailing comment) is ignored. The
//! path is split on `/` into components; an empty path or an empty component
//! makes the directive malformed, which aborts the whole run.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A parsed internal include directive.
///
/// Holds the `/`-separated components of the quoted path in order. The
/// parser guarantees at least one component and no empty components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    components: Vec<String>,
}

impl IncludeDirective {
    /// The path components of the directive, in order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// The final path component - the included file's name.
    pub fn file_name(&self) -> &str {
        // The parser rejects empty component lists, so last() always holds.
        self.components.last().map(String::as_str).unwrap_or_default()
    }

    /// Resolve the directive against the include root by joining the
    /// components onto it.
    pub fn resolve(&self, include_root: &Path) -> PathBuf {
        let mut path = include_root.to_path_buf();
        for component in &self.components {
            path.push(component);
        }
        path
    }
}

/// Scan a single line for an internal include directive.
///
/// Returns `Ok(None)` for ordinary lines that should be copied through to
/// the output, `Ok(Some(..))` for a well-formed directive, and an error for
/// a line that starts with the prefix but cannot be parsed. `file` and
/// `line_no` (1-based) locate the line for error reporting.
///
/// # Examples
///
/// ```
/// use single_header::directive::scan_line;
/// use std::path::Path;
///
/// let line = r#"#include "mylib/detail/ops.hpp""#;
/// let parsed = scan_line(line, "#include \"", Path::new("mylib.hpp"), 1)
///     .unwrap()
///     .unwrap();
/// assert_eq!(parsed.components(), ["mylib", "detail", "ops.hpp"]);
/// assert_eq!(parsed.file_name(), "ops.hpp");
/// ```
pub fn scan_line(
    line: &str,
    prefix: &str,
    file: &Path,
    line_no: usize,
) -> Result<Option<IncludeDirective>> {
    let Some(rest) = line.strip_prefix(prefix) else {
        return Ok(None);
    };

    let malformed = |reason: &str| Error::MalformedDirective {
        file: file.display().to_string(),
        line: line_no,
        content: line.to_string(),
        reason: reason.to_string(),
    };

    let Some(end) = rest.find('"') else {
        return Err(malformed("no closing quote terminating the include path"));
    };

    let quoted = &rest[..end];
    if quoted.is_empty() {
        return Err(malformed("empty include path"));
    }

    let mut components = Vec::new();
    for component in quoted.split('/') {
        if component.is_empty() {
            return Err(malformed("empty component in include path"));
        }
        components.push(component.to_string());
    }

    Ok(Some(IncludeDirective { components }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DIRECTIVE_PREFIX;

    fn scan(line: &str) -> Result<Option<IncludeDirective>> {
        scan_line(line, DIRECTIVE_PREFIX, Path::new("test.hpp"), 7)
    }

    #[test]
    fn test_scan_simple_directive() {
        let directive = scan(r#"#include "mylib/core.hpp""#).unwrap().unwrap();
        assert_eq!(directive.components(), ["mylib", "core.hpp"]);
        assert_eq!(directive.file_name(), "core.hpp");
    }

    #[test]
    fn test_scan_single_component_directive() {
        let directive = scan(r#"#include "core.hpp""#).unwrap().unwrap();
        assert_eq!(directive.components(), ["core.hpp"]);
        assert_eq!(directive.file_name(), "core.hpp");
    }

    #[test]
    fn test_scan_deep_directive() {
        let directive = scan(r#"#include "mylib/detail/nested/deep.hpp""#)
            .unwrap()
            .unwrap();
        assert_eq!(directive.components().len(), 4);
    }

    #[test]
    fn test_scan_ignores_trailing_text() {
        let directive = scan(r#"#include "mylib/core.hpp" // IWYU pragma: export"#)
            .unwrap()
            .unwrap();
        assert_eq!(directive.components(), ["mylib", "core.hpp"]);
    }

    #[test]
    fn test_scan_plain_line_passes_through() {
        assert!(scan("int answer = 42;").unwrap().is_none());
    }

    #[test]
    fn test_scan_angle_include_passes_through() {
        assert!(scan("#include <vector>").unwrap().is_none());
    }

    #[test]
    fn test_scan_indented_directive_passes_through() {
        // Prefix matching is literal: a leading space means no match.
        assert!(scan(r#"  #include "mylib/core.hpp""#).unwrap().is_none());
    }

    #[test]
    fn test_scan_commented_directive_passes_through() {
        assert!(scan(r#"// #include "mylib/core.hpp""#).unwrap().is_none());
    }

    #[test]
    fn test_scan_missing_closing_quote_is_malformed() {
        let error = scan(r#"#include "mylib/core.hpp"#).unwrap_err();
        let display = format!("{}", error);
        assert!(display.contains("test.hpp:7"));
        assert!(display.contains("no closing quote"));
    }

    #[test]
    fn test_scan_empty_path_is_malformed() {
        let error = scan(r#"#include """#).unwrap_err();
        assert!(format!("{}", error).contains("empty include path"));
    }

    #[test]
    fn test_scan_leading_slash_is_malformed() {
        let error = scan(r#"#include "/mylib/core.hpp""#).unwrap_err();
        assert!(format!("{}", error).contains("empty component"));
    }

    #[test]
    fn test_scan_doubled_slash_is_malformed() {
        let error = scan(r#"#include "mylib//core.hpp""#).unwrap_err();
        assert!(format!("{}", error).contains("empty component"));
    }

    #[test]
    fn test_scan_trailing_slash_is_malformed() {
        let error = scan(r#"#include "mylib/""#).unwrap_err();
        assert!(format!("{}", error).contains("empty component"));
    }

    #[test]
    fn test_scan_with_custom_prefix() {
        let directive = scan_line(
            r#"#pragma amalgamate "util/strings.hpp""#,
            "#pragma amalgamate \"",
            Path::new("lib.hpp"),
            1,
        )
        .unwrap()
        .unwrap();
        assert_eq!(directive.components(), ["util", "strings.hpp"]);
    }

    #[test]
    fn test_resolve_joins_components_under_root() {
        let directive = scan(r#"#include "mylib/detail/ops.hpp""#).unwrap().unwrap();
        let resolved = directive.resolve(Path::new("include"));
        assert_eq!(
            resolved,
            Path::new("include").join("mylib").join("detail").join("ops.hpp")
        );
    }
}
