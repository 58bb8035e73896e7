//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the include
//! graph of the configured entry files in a hierarchical format.
//!
//! ## Functionality
//!
//! - **Include Graph Visualization**: Shows every reference the amalgamation
//!   would follow, in traversal order
//! - **De-duplication Preview**: Marks references that would be skipped and
//!   marker files that re-expand on every reference
//! - **Depth Control**: Supports `--depth` flag to limit tree depth
//! - **Formats**: Renders as text (default) or JSON for scripting
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::path::PathBuf;

use single_header::amalgamate::Amalgamator;
use single_header::config;
use single_header::graph::{self, IncludeNode, NodeStatus};
use single_header::suggestions;

/// Display the include graph of the configured entries
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the .single-header.yaml configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = ".single-header.yaml",
        env = "SINGLE_HEADER_CONFIG"
    )]
    pub config: PathBuf,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree.
    /// Use 0 to show only the entry files, 1 to show their direct includes, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,
}

/// Execute the `tree` command.
///
/// This function handles the logic for the `tree` subcommand. It loads the
/// configuration file, walks the include graph of every entry, and displays
/// the result in the requested format.
pub fn execute(args: TreeArgs) -> Result<()> {
    let config_path = &args.config;
    if !config_path.exists() {
        return Err(suggestions::config_not_found(config_path));
    }
    let config = config::from_file(config_path)?;

    let amalgamator = Amalgamator::new(config.include_root, config.prefix, config.markers);
    let nodes = graph::walk_all(&amalgamator, &config.entries)?;

    match args.format.as_str() {
        "text" => {
            println!("🌳 Include graph for: {}", config_path.display());
            for node in &nodes {
                let tree_root = build_tree_node(node, args.depth.unwrap_or(usize::MAX), 0);
                print_tree(&tree_root)
                    .map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
            }
        }
        "json" => {
            // Keep stdout machine-readable: JSON only, no banner.
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        other => {
            anyhow::bail!("Unknown format '{}'. Valid formats are: text, json", other);
        }
    }

    Ok(())
}

/// Build a display node from an include graph node
fn build_tree_node(node: &IncludeNode, max_depth: usize, current_depth: usize) -> TreeNode {
    let label = match node.status {
        NodeStatus::Expanded => node.path.clone(),
        NodeStatus::Skipped => format!("{} (deduplicated)", node.path),
        NodeStatus::Marker => format!("{} (marker)", node.path),
    };

    if current_depth >= max_depth || node.children.is_empty() {
        TreeNode {
            label,
            children: vec![],
        }
    } else {
        let children = node
            .children
            .iter()
            .map(|child| build_tree_node(child, max_depth, current_depth + 1))
            .collect();
        TreeNode { label, children }
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
