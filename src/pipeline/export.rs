// src/pipeline/export.rs

//! Result export to JSON and CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::ProfileResult;

/// CSV header row.
pub const CSV_HEADER: [&str; 3] = ["platform", "url", "status"];

/// Output format for exported results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    profiles: &'a [ProfileResult],
}

/// Write `{"profiles": [...]}` as pretty-printed JSON.
pub fn write_json<W: Write>(mut writer: W, profiles: &[ProfileResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &ExportDocument { profiles })?;
    writeln!(writer)?;
    Ok(())
}

/// Write a `platform,url,status` table.
pub fn write_csv<W: Write>(mut writer: W, profiles: &[ProfileResult]) -> Result<()> {
    write_row(&mut writer, &CSV_HEADER)?;
    for profile in profiles {
        write_row(
            &mut writer,
            &[
                profile.platform.as_str(),
                profile.url.as_str(),
                profile.status.as_str(),
            ],
        )?;
    }
    Ok(())
}

/// Export results to a file, replacing it if present.
pub fn export_to_file(
    path: impl AsRef<Path>,
    profiles: &[ProfileResult],
    format: ExportFormat,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Json => write_json(&mut writer, profiles)?,
        ExportFormat::Csv => write_csv(&mut writer, profiles)?,
    }
    writer.flush()?;

    log::info!("Exported {} results to {}", profiles.len(), path.display());
    Ok(())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(writer: &mut W, row: &[&str]) -> Result<()> {
    let cells: Vec<String> = row
        .iter()
        .map(|cell| {
            if needs_quotes(cell) {
                format!("\"{}\"", cell.replace('"', "\"\""))
            } else {
                cell.to_string()
            }
        })
        .collect();
    writeln!(writer, "{}", cells.join(","))?;
    Ok(())
}
