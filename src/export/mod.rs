// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::{RankingExport, SessionExport};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for report writers.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} report written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Parse the `export_format` config value.
    pub fn from_code(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}
