//! Example demonstrating how the Amalgamator is used as a library
//!
//! Run with: cargo run --example amalgamate_usage

use single_header::amalgamate::{render, Amalgamator};
use single_header::defaults;
use single_header::graph::{self, IncludeNode};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // In the real application, the include root would come from configuration
    let root = std::env::temp_dir().join("single-header-demo");
    let mylib = root.join("include/mylib");
    fs::create_dir_all(&mylib)?;

    // A tiny library: an umbrella header, two modules, and a shared dependency
    fs::write(
        mylib.join("mylib.hpp"),
        "#include \"mylib/core.hpp\"\n#include \"mylib/util.hpp\"\n",
    )?;
    fs::write(mylib.join("core.hpp"), "int core();\n")?;
    fs::write(
        mylib.join("util.hpp"),
        "#include \"mylib/core.hpp\"\nint util();\n",
    )?;

    // Create the amalgamator with the default directive prefix and markers
    let amalgamator = Amalgamator::new(
        root.join("include"),
        defaults::DIRECTIVE_PREFIX.to_string(),
        defaults::default_markers(),
    );

    // Example 1: Merge the library into one self-contained header
    let entry = mylib.join("mylib.hpp");
    let lines = amalgamator.amalgamate(&entry)?;
    println!("Merged {} lines:", lines.len());
    print!("{}", render(&lines));

    // Example 2: Walk the include graph without producing output
    println!("\nInclude graph:");
    let tree = graph::walk(&amalgamator, &entry)?;
    print_node(&tree, 0);

    Ok(())
}

fn print_node(node: &IncludeNode, depth: usize) {
    println!("{}{} ({:?})", "  ".repeat(depth), node.path, node.status);
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
