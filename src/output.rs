//! Status-line appearance for the CLI commands.
//!
//! `build` and `check` print short status lines around the actual payload.
//! Whether those lines carry emoji or their plain bracketed tags is decided
//! once per run from the global `--color` flag and the usual terminal
//! conventions, and carried in an [`OutputConfig`].
//!
//! Auto-detection honors, in order: `NO_COLOR` (set at all means off, per
//! <https://no-color.org/>), `CLICOLOR=0` (off), `CLICOLOR_FORCE` (on even
//! without a TTY), `TERM=dumb` (off), and finally the terminal capabilities
//! reported by `console`.

use std::env;

/// Per-run decision on decorated output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether status lines use emoji instead of their plain tags.
    pub decorated: bool,
}

impl OutputConfig {
    /// Resolve the `--color` flag (`always`, `never`, or `auto`) against
    /// the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let decorated = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => auto_detect(),
        };
        Self { decorated }
    }

    /// Pick the decorated or plain form of a status tag.
    ///
    /// ```rust,ignore
    /// println!("{} Amalgamating 3 entries...", out.emoji("📦", "[BUILD]"));
    /// ```
    pub fn emoji<'a>(&self, symbol: &'a str, plain: &'a str) -> &'a str {
        if self.decorated {
            symbol
        } else {
            plain
        }
    }
}

/// The order matters: an explicit opt-out wins over `CLICOLOR_FORCE`, and
/// the force flag in turn bypasses the TTY check.
fn auto_detect() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}
