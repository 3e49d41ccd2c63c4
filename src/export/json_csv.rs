// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write rows as pretty-printed JSON.
pub(crate) fn export_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Writing JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Write rows as CSV. The header is written explicitly so the file carries
/// it even when there are no rows.
pub(crate) fn export_csv<T: Serialize>(
    rows: &[T],
    headers: &[&'static str],
    path: &Path,
) -> AppResult<()> {
    info(format!("Writing CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    wtr.write_record(headers)?;

    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
