//! # Header Amalgamation
//!
//! This module implements the core of single-header: recursively inlining a
//! library's internal includes to produce one self-contained header.
//!
//! ## Key Components
//!
//! - **`Amalgamator`**: The engine, configured with an include root, a
//!   directive prefix, and a set of marker file names
//! - **`render`**: Joins the merged lines into the final output text
//!
//! ## Functionality
//!
//! Expansion is depth-first and in place: each file's lines are copied to
//! the output in order, and when a line is an internal include directive it
//! is replaced by the expansion of the referenced file before the scan of
//! the current file continues. Lines before a directive therefore precede
//! the included content, and lines after it follow.
//!
//! A visited set de-duplicates headers. Each file is recorded as visited
//! *before* its contents are scanned, so a file that is reached again -
//! through a diamond dependency or an include cycle - contributes nothing
//! the second time and the recursion terminates. Marker files (header guards
//! split into prologue/epilogue wrappers) are the exception: they bypass the
//! visited set entirely and are re-expanded at every reference. Nothing
//! records marker visits, so a marker that includes itself (directly or
//! through another marker) recurses without bound; markers are expected to
//! be leaf wrappers.
//!
//! All entry files of one run share a single visited set, so a header pulled
//! in by the first entry is not repeated when a later entry references it.
//!
//! ## Path Identity
//!
//! Visited-tracking compares resolved paths as joined, without consulting
//! the filesystem. Two directives spelling the same file identically always
//! coalesce; symlinked or otherwise aliased spellings are treated as
//! distinct files.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::directive;
use crate::error::{Error, Result};

/// The recursive include inliner.
///
/// An `Amalgamator` holds the settings that drive one amalgamation run:
/// where include paths resolve (`include_root`), what a directive looks
/// like (`prefix`), and which file names are exempt from de-duplication
/// (`markers`).
#[derive(Debug, Clone)]
pub struct Amalgamator {
    include_root: PathBuf,
    prefix: String,
    markers: BTreeSet<String>,
}

impl Amalgamator {
    /// Create an amalgamator from explicit settings.
    pub fn new(include_root: PathBuf, prefix: String, markers: Vec<String>) -> Self {
        Self {
            include_root,
            prefix,
            markers: markers.into_iter().collect(),
        }
    }

    /// The directory include directives resolve against.
    pub fn include_root(&self) -> &Path {
        &self.include_root
    }

    /// The literal prefix that marks a line as an include directive.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether `path` names a marker file.
    ///
    /// Markers are matched by their final path component only, so a marker
    /// named `prologue.hpp` matches that file in any directory.
    pub fn is_marker(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.markers.contains(name))
    }

    /// Amalgamate a single entry file into its merged lines.
    pub fn amalgamate(&self, entry: &Path) -> Result<Vec<String>> {
        let mut visited = BTreeSet::new();
        if !self.is_marker(entry) {
            visited.insert(entry.to_path_buf());
        }
        let mut lines = Vec::new();
        self.expand_into(entry, None, &mut visited, &mut lines)?;
        Ok(lines)
    }

    /// Amalgamate several entry files, in order, into one merged output.
    ///
    /// All entries share one visited set: a header already inlined by an
    /// earlier entry is not repeated by a later one. An entry that was
    /// itself pulled in earlier is skipped with a warning, unless it is a
    /// marker file.
    pub fn amalgamate_all(&self, entries: &[PathBuf]) -> Result<Vec<String>> {
        let mut visited = BTreeSet::new();
        let mut lines = Vec::new();

        for entry in entries {
            if !self.is_marker(entry) && !visited.insert(entry.clone()) {
                warn!(
                    "entry {} was already inlined by an earlier entry, skipping",
                    entry.display()
                );
                continue;
            }
            self.expand_into(entry, None, &mut visited, &mut lines)?;
        }

        Ok(lines)
    }

    /// Expand one file into `out`, recursing through its directives.
    ///
    /// The caller is responsible for having recorded `path` in `visited`
    /// (except for markers, which are never recorded).
    fn expand_into(
        &self,
        path: &Path,
        referenced_from: Option<(&Path, usize)>,
        visited: &mut BTreeSet<PathBuf>,
        out: &mut Vec<String>,
    ) -> Result<()> {
        let text = read_source(path, referenced_from)?;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            match directive::scan_line(line, &self.prefix, path, line_no)? {
                None => out.push(line.to_string()),
                Some(include) => {
                    let resolved = include.resolve(&self.include_root);
                    if self.is_marker(&resolved) {
                        debug!("re-expanding marker {}", resolved.display());
                        self.expand_into(&resolved, Some((path, line_no)), visited, out)?;
                    } else if visited.insert(resolved.clone()) {
                        debug!("expanding {}", resolved.display());
                        self.expand_into(&resolved, Some((path, line_no)), visited, out)?;
                    } else {
                        debug!("skipping {}, already inlined", resolved.display());
                    }
                }
            }
        }

        Ok(())
    }
}

/// Read a source file, mapping a missing file to [`Error::FileNotFound`]
/// with the referencing location attached.
///
/// Windows line endings are normalized to `\n` by the line-based processing
/// downstream.
pub(crate) fn read_source(path: &Path, referenced_from: Option<(&Path, usize)>) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
                referenced_from: referenced_from
                    .map(|(file, line)| format!("{}:{}", file.display(), line)),
            }
        } else {
            Error::Io(source)
        }
    })
}

/// Render merged lines into the final output text.
///
/// Lines are joined with `\n` and the text ends with a single trailing
/// newline. An empty line list renders as the empty string.
pub fn render(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
