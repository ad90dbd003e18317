//! Terminal output formatting utilities.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use gfm_core::{BranchSummary, Trunk};

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like the name of
/// a created branch.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Print a branch preview block (suppressed in quiet mode).
pub fn summary(summary: &BranchSummary) {
    if is_quiet() {
        return;
    }
    for line in summary_lines(summary) {
        println!("  {line}");
    }
}

fn summary_lines(summary: &BranchSummary) -> [String; 3] {
    [
        format!("{} {}", "Repository: ".dimmed(), summary.repository),
        format!("{} {}", "Base Branch:".dimmed(), summary.base),
        format!("{} {}", "New Branch: ".dimmed(), summary.branch.cyan().bold()),
    ]
}

/// Colored trunk label.
#[must_use]
pub fn trunk_label(trunk: Trunk) -> String {
    paint_trunk(trunk, trunk.branch())
}

fn paint_trunk(trunk: Trunk, text: &str) -> String {
    match trunk {
        Trunk::Main => text.green().to_string(),
        Trunk::Master => text.yellow().to_string(),
    }
}

/// One line of `gfm list` output.
#[must_use]
pub fn repo_line(name: &str, trunk: Trunk, path: &Path, name_width: usize) -> String {
    // Pad before coloring so escape codes don't count toward the width.
    let trunk_column = paint_trunk(trunk, &format!("{:<6}", trunk.branch()));
    format!(
        "  {}  {}  {}",
        format!("{name:<name_width$}").bold(),
        trunk_column,
        path.display().to_string().dimmed()
    )
}
