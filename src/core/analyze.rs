//! Full analysis pipeline: ingest → diagnostics → month filter →
//! {aggregate → rank} + longest session → report files.

use crate::core::attendance::aggregate;
use crate::core::filter::{TargetMonth, filter_month};
use crate::core::rank::rank_users;
use crate::core::session::longest_session;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ingest::{IngestReport, read_events};
use crate::models::event::GateEvent;
use crate::ui::messages::{diag, info, success, warning};
use std::path::Path;

pub struct AnalyzeLogic;

impl AnalyzeLogic {
    /// Run the whole batch and write both reports.
    pub fn run(
        input: &Path,
        out_dir: &Path,
        month: &TargetMonth,
        format: ExportFormat,
        force: bool,
    ) -> AppResult<()> {
        let events = load_month(input, month)?;

        let user_data = aggregate(&events);
        let ranking = rank_users(&user_data);
        let winner = longest_session(&events);

        ExportLogic::write_reports(&ranking, &winner, out_dir, format, force)?;

        success(format!(
            "Analyzed {} events for {} ({} users).",
            events.len(),
            month.label(),
            ranking.len()
        ));

        Ok(())
    }
}

/// Ingest the input file, report skipped records, and narrow to the target
/// month. Shared by `analyze` and the stdout report commands.
pub fn load_month(input: &Path, month: &TargetMonth) -> AppResult<Vec<GateEvent>> {
    let report = read_events(input)?;
    report_issues(&report);

    Ok(filter_month(&report.events, month))
}

fn report_issues(report: &IngestReport) {
    if report.issues.is_empty() {
        return;
    }

    warning(format!(
        "Skipped {} of {} records:",
        report.skipped(),
        report.total_rows()
    ));
    for issue in &report.issues {
        diag(issue);
    }
    info(format!("{} records ingested.", report.events.len()));
}
