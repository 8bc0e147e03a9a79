// src/utils/console.rs

//! User-facing console output.
//!
//! Diagnostics go through the `log` facade; this module prints the report
//! itself (headers, tables, summaries) to stdout.

use std::sync::OnceLock;

/// Whether report output is suppressed
static QUIET: OnceLock<bool> = OnceLock::new();

/// Initialize console output
pub fn init(quiet: bool) {
    let _ = QUIET.set(quiet);
}

fn enabled() -> bool {
    !QUIET.get().copied().unwrap_or(false)
}

/// Print a block of pre-rendered text
pub fn print_block(text: &str) {
    if enabled() {
        print!("{text}");
    }
}

/// Print a header
pub fn header(title: &str) {
    if enabled() {
        println!();
        println!("{}", "═".repeat(60));
        println!("  {title}");
        println!("{}", "═".repeat(60));
    }
}

/// Print a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    if enabled() {
        print!("{}", format_summary(title, items));
    }
}

fn format_summary(title: &str, items: &[(&str, String)]) -> String {
    let mut out = format!("\n[SUMMARY] {title}\n");
    for (key, value) in items {
        out.push_str(&format!("    {key}: {value}\n"));
    }
    out
}

/// Render rows as a left-aligned, space-padded table.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n", line.trim_end())
    };

    let mut out = render(headers.to_vec());
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push_str(&render(rule.iter().map(String::as_str).collect()));
    for row in rows {
        out.push_str(&render(row.iter().map(String::as_str).collect()));
    }
    out
}
