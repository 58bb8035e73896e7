//! # Include Graph Inspection
//!
//! This module walks the include graph the same way amalgamation does, but
//! records what it finds instead of producing output lines. The result is a
//! tree of [`IncludeNode`]s mirroring the traversal: one node per reference,
//! tagged with how the engine handled it.
//!
//! The walk shares its de-duplication rules with the amalgamation engine -
//! same visited-before-scan recording, same marker exemption - so the tree
//! is a faithful preview of what `build` would inline where.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::amalgamate::{read_source, Amalgamator};
use crate::directive;
use crate::error::Result;

/// How the traversal handled one reference in the include graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeStatus {
    /// First reference: the file's contents are inlined here.
    Expanded,
    /// The file was already inlined through an earlier reference.
    Skipped,
    /// Marker file: re-expanded on every reference.
    Marker,
}

/// One reference in the include graph, in traversal order.
#[derive(Debug, Clone, Serialize)]
pub struct IncludeNode {
    /// The resolved path of the referenced file.
    pub path: String,
    /// How the reference was handled.
    pub status: NodeStatus,
    /// References made by this file, in source order. Empty for skipped
    /// nodes, whose contents are not scanned again.
    pub children: Vec<IncludeNode>,
}

/// Walk the include graph of a single entry file.
pub fn walk(amalgamator: &Amalgamator, entry: &Path) -> Result<IncludeNode> {
    let mut visited = BTreeSet::new();
    walk_path(amalgamator, entry, None, &mut visited)
}

/// Walk the include graphs of several entries with one shared visited set,
/// mirroring [`Amalgamator::amalgamate_all`].
pub fn walk_all(amalgamator: &Amalgamator, entries: &[PathBuf]) -> Result<Vec<IncludeNode>> {
    let mut visited = BTreeSet::new();
    let mut roots = Vec::new();
    for entry in entries {
        roots.push(walk_path(amalgamator, entry, None, &mut visited)?);
    }
    Ok(roots)
}

fn walk_path(
    amalgamator: &Amalgamator,
    path: &Path,
    referenced_from: Option<(&Path, usize)>,
    visited: &mut BTreeSet<PathBuf>,
) -> Result<IncludeNode> {
    if amalgamator.is_marker(path) {
        let children = walk_children(amalgamator, path, referenced_from, visited)?;
        return Ok(IncludeNode {
            path: path.display().to_string(),
            status: NodeStatus::Marker,
            children,
        });
    }

    if !visited.insert(path.to_path_buf()) {
        return Ok(IncludeNode {
            path: path.display().to_string(),
            status: NodeStatus::Skipped,
            children: Vec::new(),
        });
    }

    let children = walk_children(amalgamator, path, referenced_from, visited)?;
    Ok(IncludeNode {
        path: path.display().to_string(),
        status: NodeStatus::Expanded,
        children,
    })
}

fn walk_children(
    amalgamator: &Amalgamator,
    path: &Path,
    referenced_from: Option<(&Path, usize)>,
    visited: &mut BTreeSet<PathBuf>,
) -> Result<Vec<IncludeNode>> {
    let text = read_source(path, referenced_from)?;
    let mut children = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if let Some(include) = directive::scan_line(line, amalgamator.prefix(), path, line_no)? {
            let resolved = include.resolve(amalgamator.include_root());
            children.push(walk_path(amalgamator, &resolved, Some((path, line_no)), visited)?);
        }
    }

    Ok(children)
}
