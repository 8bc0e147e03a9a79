// src/pipeline/report.rs

//! Result filtering and table rendering.

use crate::models::{ProfileResult, Status};
use crate::utils::console;

/// Note printed above every results table.
pub const ACCURACY_NOTE: &str = "Note: Results may require manual verification for accuracy.";

/// Message printed when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "No profile results to display.";

/// Optional filters applied before display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Keep only this status
    pub status: Option<Status>,
    /// Keep only this platform (case-insensitive)
    pub platform: Option<String>,
}

impl ReportFilter {
    pub fn matches(&self, profile: &ProfileResult) -> bool {
        if let Some(status) = self.status {
            if profile.status != status {
                return false;
            }
        }
        if let Some(platform) = &self.platform {
            if profile.platform.to_lowercase() != platform.to_lowercase() {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, profiles: &'a [ProfileResult]) -> Vec<&'a ProfileResult> {
        profiles.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Render the results report.
///
/// An empty result set renders only [`EMPTY_MESSAGE`]; otherwise the filtered
/// rows are tabulated under a heading and the accuracy note.
pub fn render_report(profiles: &[ProfileResult], filter: &ReportFilter) -> String {
    if profiles.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let rows: Vec<Vec<String>> = filter
        .apply(profiles)
        .into_iter()
        .map(|p| vec![p.platform.clone(), p.url.clone(), p.status.to_string()])
        .collect();

    let mut out = String::from("\nUsername Search Results\n");
    out.push_str(ACCURACY_NOTE);
    out.push('\n');
    out.push_str(&console::format_table(
        &["Platform", "URL", "Status"],
        &rows,
    ));
    out
}
