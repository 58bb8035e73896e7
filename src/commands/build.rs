//! Build command implementation
//!
//! The build command executes the full amalgamation pipeline:
//! 1. Load settings from .single-header.yaml, or run config-free on
//!    positional entries
//! 2. Expand the entries depth-first, de-duplicating through one shared
//!    visited set
//! 3. Render the merged lines and write them to the output target
//!
//! Expansion completes before anything is written, so a failing build never
//! leaves a half-written header behind.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use single_header::amalgamate::{render, Amalgamator};
use single_header::config;
use single_header::defaults;
use single_header::output::OutputConfig;
use single_header::suggestions;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Entry files to amalgamate; bypasses the config file when given
    #[arg(value_name = "ENTRY")]
    pub entries: Vec<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "SINGLE_HEADER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory include directives resolve against
    #[arg(long, value_name = "DIR")]
    pub include_root: Option<PathBuf>,

    /// Literal prefix recognized as an internal include directive
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Marker file expanded on every reference (repeatable)
    #[arg(long = "marker", value_name = "NAME")]
    pub markers: Vec<String>,

    /// Output file (defaults to the config's `output`)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write to stdout even when an output file is configured
    #[arg(long)]
    pub stdout: bool,

    /// Show what would be done without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Effective settings after merging the config file and flag overrides.
struct BuildSettings {
    include_root: PathBuf,
    prefix: String,
    markers: Vec<String>,
    entries: Vec<PathBuf>,
    output: Option<PathBuf>,
}

/// Merge the config file (or defaults) with CLI flag overrides.
///
/// Positional entries switch the command into config-free mode: defaults
/// plus flags, no config file required.
fn resolve_settings(args: &BuildArgs) -> Result<BuildSettings> {
    let mut settings = if args.entries.is_empty() {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::CONFIG_FILE_NAME));

        if !config_path.exists() {
            return Err(suggestions::config_not_found(&config_path));
        }

        let config = config::from_file(&config_path)?;
        BuildSettings {
            include_root: config.include_root,
            prefix: config.prefix,
            markers: config.markers,
            entries: config.entries,
            output: config.output,
        }
    } else {
        BuildSettings {
            include_root: PathBuf::from(defaults::INCLUDE_ROOT),
            prefix: defaults::DIRECTIVE_PREFIX.to_string(),
            markers: defaults::default_markers(),
            entries: args.entries.clone(),
            output: None,
        }
    };

    if let Some(include_root) = &args.include_root {
        settings.include_root = include_root.clone();
    }
    if let Some(prefix) = &args.prefix {
        settings.prefix = prefix.clone();
    }
    if !args.markers.is_empty() {
        settings.markers = args.markers.clone();
    }
    if let Some(output) = &args.output {
        settings.output = Some(output.clone());
    }
    if args.stdout {
        settings.output = None;
    }

    Ok(settings)
}

/// Execute the build command
pub fn execute(args: BuildArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    let settings = resolve_settings(&args)?;

    // In stdout mode the merged header is the only thing on stdout, so all
    // status chatter is suppressed.
    let quiet = args.quiet || (settings.output.is_none() && !args.dry_run);

    if !quiet {
        println!(
            "{} Amalgamating {} entry file(s)",
            out.emoji("📦", "[BUILD]"),
            settings.entries.len()
        );

        if args.dry_run {
            println!(
                "{} DRY RUN MODE - Nothing will be written",
                out.emoji("🔎", "[DRY-RUN]")
            );
        }

        if args.verbose {
            println!("   include root: {}", settings.include_root.display());
            println!("   prefix: {:?}", settings.prefix);
            println!("   markers: {}", settings.markers.join(", "));
            for entry in &settings.entries {
                println!("   entry: {}", entry.display());
            }
        }
    }

    let amalgamator = Amalgamator::new(
        settings.include_root.clone(),
        settings.prefix.clone(),
        settings.markers.clone(),
    );
    let lines = amalgamator.amalgamate_all(&settings.entries)?;
    let rendered = render(&lines);
    let duration = start_time.elapsed();

    if args.dry_run {
        if !quiet {
            println!(
                "{} Amalgamated {} line(s) in {:.2}s",
                out.emoji("✅", "[OK]"),
                lines.len(),
                duration.as_secs_f64()
            );
            match &settings.output {
                Some(path) => println!("   Would write to: {}", path.display()),
                None => println!("   Would write to stdout"),
            }
        }
        return Ok(());
    }

    match &settings.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &rendered)?;

            if !quiet {
                println!(
                    "{} Amalgamated {} line(s) in {:.2}s",
                    out.emoji("✅", "[OK]"),
                    lines.len(),
                    duration.as_secs_f64()
                );
                println!("   Written to: {}", path.display());
            }
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}
