//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which creates a new
//! `.single-header.yaml` configuration file in the current directory.
//!
//! ## Functionality
//!
//! - **Starter Config**: Writes a commented configuration with every key
//!   spelled out, ready to be edited
//! - **Force Mode**: Overwrites an existing configuration file when specified

use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::Path;

use single_header::defaults;

/// Initialize a new .single-header.yaml configuration file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the `init` command.
///
/// Creates `.single-header.yaml` in the current directory, refusing to
/// overwrite an existing file unless `--force` is given.
pub fn execute(args: InitArgs) -> Result<()> {
    let config_path = Path::new(defaults::CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file '{}' already exists. Use --force to overwrite.",
            defaults::CONFIG_FILE_NAME
        ));
    }

    println!("🎯 Initializing single-header configuration...");

    fs::write(config_path, starter_config())?;

    println!("✅ Created {}", defaults::CONFIG_FILE_NAME);
    println!("💡 Edit the entries, then run `single-header build`");

    Ok(())
}

/// Generate the starter configuration with every key spelled out.
fn starter_config() -> String {
    r#"# single-header configuration
# Relative paths resolve against the directory you run the tool from.

# Directory that internal include directives resolve against.
include-root: include

# A line is an internal include when it starts with this exact prefix;
# the include path runs up to the next closing quote.
prefix: '#include "'

# Wrapper headers that are re-expanded on every reference instead of
# being inlined just once.
markers:
  - prologue.hpp
  - epilogue.hpp

# Entry files, expanded in order into one output.
entries:
  - include/mylib/mylib.hpp

# Merged header destination; remove to write to stdout.
output: single_include/mylib.hpp
"#
    .to_string()
}
