//! Pipeline entry points for username searches.
//!
//! - `run_search`: Search a batch of usernames and persist the cache
//! - `input`: Read usernames from a file
//! - `report`: Filter and render results
//! - `export`: Write results as JSON or CSV

pub mod export;
pub mod input;
pub mod report;
pub mod search;

pub use export::{ExportFormat, export_to_file};
pub use input::{clean_usernames, read_usernames};
pub use report::{ReportFilter, render_report};
pub use search::run_search;
