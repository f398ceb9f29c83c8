//! Terminal output for sync results.
//!
//! Per-file results go to stdout, failures to stderr. Styling is dropped
//! when `NO_COLOR` is set so the lines stay greppable in scripts.

use console::style;
use std::fmt::Display;

fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// A file that was written or is already current, e.g.
/// `✓ wrote aliases.sh (84 bytes)`.
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// A skipped file, a failed stage, or a fatal error. Goes to stderr.
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Something the user should look at but that did not block the file:
/// a tolerated stderr line from the store, or a dry-run change.
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Resolved option shown before a sync starts (`suffix`, `directory`).
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Output file name, highlighted inside a result line.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}
