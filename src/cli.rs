//! Shared stderr output helpers for transcoord binaries.

use std::time::{Duration, Instant};

use colored::Colorize;

/// Tool name and crate version, e.g. "transcoord v0.1.0".
#[must_use]
pub fn version_line() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

pub fn banner(subtitle: &str) {
    eprintln!();
    eprintln!("{} {}", version_line().bold().cyan(), subtitle.dimmed());
    eprintln!("{}", "genomic to CSN coordinate mapping".dimmed());
    eprintln!();
}

pub fn section(title: &str) {
    let bar = "─".repeat(50);
    eprintln!("{} {}", title.bold().blue(), bar.dimmed());
}

pub fn kv(key: &str, value: &str) {
    eprintln!("  {:<20} {}", key.dimmed(), value);
}

pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg.yellow());
}

/// Formats a duration as HH:MM:SS.d (tenths of a second).
#[must_use]
pub fn format_elapsed(d: Duration) -> String {
    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let tenths = d.subsec_millis() / 100;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{tenths}")
}

pub fn print_summary(start: Instant, annotated: usize, skipped: usize) {
    eprintln!();
    eprintln!(
        "{}  {}\n{}  {}\n{}  {}",
        "Time".dimmed(),
        format_elapsed(start.elapsed()).bold(),
        "Annotated".dimmed(),
        annotated.to_string().bold(),
        "Skipped".dimmed(),
        skipped.to_string().bold(),
    );
    eprintln!();
}
