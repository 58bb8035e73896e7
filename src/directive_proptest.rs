//! Property-based tests for include directive parsing.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::directive::scan_line;
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    const PREFIX: &str = "#include \"";

    // ============================================================================
    // scan_line property tests
    // ============================================================================

    proptest! {
        /// Property: lines that do not start with the prefix are never
        /// directives and never errors
        #[test]
        fn scan_line_passes_through_non_prefixed_lines(line in "[a-zA-Z0-9 _<>#/.;{}]*") {
            prop_assume!(!line.starts_with(PREFIX));
            let result = scan_line(&line, PREFIX, Path::new("test.hpp"), 1);
            prop_assert!(result.is_ok());
            prop_assert!(
                result.unwrap().is_none(),
                "Line '{}' should pass through untouched",
                line
            );
        }

        /// Property: a well-formed directive parses into exactly its
        /// components
        #[test]
        fn scan_line_roundtrips_well_formed_directives(
            components in prop::collection::vec("[a-zA-Z0-9_]{1,12}", 1..5),
        ) {
            let line = format!("{}{}\"", PREFIX, components.join("/"));
            let parsed = scan_line(&line, PREFIX, Path::new("test.hpp"), 1)
                .unwrap()
                .unwrap();
            prop_assert_eq!(parsed.components(), components.as_slice());
        }

        /// Property: anything after the closing quote never affects the parse
        #[test]
        fn scan_line_ignores_trailing_text(trailing in "[a-zA-Z0-9 /*!.;-]*") {
            let line = format!("{}mylib/core.hpp\"{}", PREFIX, trailing);
            let parsed = scan_line(&line, PREFIX, Path::new("test.hpp"), 1)
                .unwrap()
                .unwrap();
            prop_assert_eq!(parsed.components(), ["mylib", "core.hpp"]);
        }

        /// Property: a directive without a closing quote is always rejected
        #[test]
        fn scan_line_rejects_unterminated_directives(path in "[a-zA-Z0-9_/]{0,30}") {
            let line = format!("{}{}", PREFIX, path);
            let result = scan_line(&line, PREFIX, Path::new("test.hpp"), 7);
            prop_assert!(result.is_err(), "Unterminated line '{}' should be rejected", line);
        }

        /// Property: scan_line is deterministic
        #[test]
        fn scan_line_is_deterministic(line in "[a-zA-Z0-9 _\"#/.]*") {
            let result1 = scan_line(&line, PREFIX, Path::new("test.hpp"), 1);
            let result2 = scan_line(&line, PREFIX, Path::new("test.hpp"), 1);

            prop_assert_eq!(result1.is_ok(), result2.is_ok());
            if let (Ok(first), Ok(second)) = (result1, result2) {
                prop_assert_eq!(first, second);
            }
        }
    }

    // ============================================================================
    // resolve property tests
    // ============================================================================

    proptest! {
        /// Property: resolution keeps components in order under the
        /// include root
        #[test]
        fn resolve_preserves_component_order(
            components in prop::collection::vec("[a-zA-Z0-9_]{1,8}", 1..4),
        ) {
            let line = format!("{}{}\"", PREFIX, components.join("/"));
            let parsed = scan_line(&line, PREFIX, Path::new("test.hpp"), 1)
                .unwrap()
                .unwrap();

            let resolved = parsed.resolve(Path::new("include"));
            let mut expected = PathBuf::from("include");
            for component in &components {
                expected.push(component);
            }
            prop_assert_eq!(resolved, expected);
        }

        /// Property: the file name is always the last component
        #[test]
        fn file_name_is_last_component(
            components in prop::collection::vec("[a-zA-Z0-9_]{1,8}", 1..4),
        ) {
            let line = format!("{}{}\"", PREFIX, components.join("/"));
            let parsed = scan_line(&line, PREFIX, Path::new("test.hpp"), 1)
                .unwrap()
                .unwrap();
            prop_assert_eq!(parsed.file_name(), components.last().unwrap());
        }
    }
}
