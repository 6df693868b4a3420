//! CSV export of session history: columns `time,query,result`

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::HistoryEntry;

/// File name offered by the interactive export action
pub const DEFAULT_EXPORT_FILENAME: &str = "quran_history.csv";

/// Serialize entries as CSV with a `time,query,result` header
pub fn write_csv<W: Write>(entries: &[HistoryEntry], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Write the header explicitly so an empty history still yields the column names
    csv_writer.write_record(["time", "query", "result"]).context("Failed to write CSV header")?;
    for entry in entries {
        let time = entry.time.to_rfc3339();
        csv_writer
            .write_record([time.as_str(), entry.query.as_str(), entry.result.as_str()])
            .context("Failed to write CSV row")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write entries to `path` atomically (temp file + rename)
pub fn export_csv(entries: &[HistoryEntry], path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_csv(entries, &mut buffer)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_string());
    let temp_path = path.with_file_name(format!("{}.tmp", file_name));

    fs::write(&temp_path, buffer)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| {
            format!("Failed to move history export into place: {}", path.display())
        });
    }

    info!(path = %path.display(), entries = entries.len(), "exported history");
    Ok(())
}
