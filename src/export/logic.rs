// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_out_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{RankingExport, SessionExport, ranking_headers, session_headers};
use crate::models::ranking::RankedEntry;
use crate::models::session::LongestSession;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// High-level logic for writing the two report files.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the attendance ranking and the longest-session reports into
    /// `out_dir` (created when absent).
    ///
    /// - `format`: csv | json
    /// - `force`: overwrite existing files without confirmation
    pub fn write_reports(
        ranking: &[RankedEntry],
        winner: &Option<LongestSession>,
        out_dir: &Path,
        format: ExportFormat,
        force: bool,
    ) -> AppResult<()> {
        ensure_out_dir(out_dir)?;

        if ranking.is_empty() {
            warning("⚠️  No attendance data for the selected month.");
        }

        let rank_path = report_path(out_dir, "attendance_rank", format);
        let session_path = report_path(out_dir, "longest_session", format);

        ensure_writable(&rank_path, force)?;
        ensure_writable(&session_path, force)?;

        let rank_rows: Vec<RankingExport> = ranking.iter().map(RankingExport::from).collect();
        let session_rows = vec![SessionExport::from_winner(winner)];

        match format {
            ExportFormat::Csv => {
                export_csv(&rank_rows, &ranking_headers(), &rank_path)?;
                export_csv(&session_rows, &session_headers(), &session_path)?;
            }
            ExportFormat::Json => {
                export_json(&rank_rows, &rank_path)?;
                export_json(&session_rows, &session_path)?;
            }
        }

        Ok(())
    }
}

fn report_path(out_dir: &Path, stem: &str, format: ExportFormat) -> PathBuf {
    out_dir.join(format!("{stem}.{}", format.as_str()))
}
