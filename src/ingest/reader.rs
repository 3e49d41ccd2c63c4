//! Badge-gate event log loading.
//!
//! Expected columns: `user_id`, `event_time` (YYYY-MM-DDTHH:MM:SS.ffffffZ),
//! `event_type` (gate_in/gate_out, any case). Extra columns are ignored.
//! A missing or unreadable file is fatal; a bad record only produces a
//! [`RecordIssue`] and processing continues.

use crate::errors::AppResult;
use crate::ingest::issue::{IngestReport, IssueKind, RecordIssue};
use crate::models::event::GateEvent;
use crate::models::event_type::EventType;
use crate::utils::time::parse_event_time;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

pub fn read_events(path: &Path) -> AppResult<IngestReport> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let col_user = column(&headers, "user_id");
    let col_time = column(&headers, "event_time");
    let col_type = column(&headers, "event_type");

    let mut report = IngestReport::default();

    for (idx, record) in rdr.records().enumerate() {
        let row = idx + 1;

        let record: StringRecord = match record {
            Ok(r) => r,
            Err(e) => {
                report
                    .issues
                    .push(RecordIssue::new(row, IssueKind::UnreadableRow(e.to_string())));
                continue;
            }
        };

        match parse_record(&record, col_user, col_time, col_type) {
            Ok(ev) => report.events.push(ev),
            Err(kind) => report.issues.push(RecordIssue::new(row, kind)),
        }
    }

    Ok(report)
}

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn field<'a>(record: &'a StringRecord, col: Option<usize>) -> &'a str {
    col.and_then(|i| record.get(i)).unwrap_or("")
}

fn parse_record(
    record: &StringRecord,
    col_user: Option<usize>,
    col_time: Option<usize>,
    col_type: Option<usize>,
) -> Result<GateEvent, IssueKind> {
    let user_id = field(record, col_user);
    if user_id.is_empty() {
        return Err(IssueKind::MissingField("user_id"));
    }

    let raw_time = field(record, col_time);
    if raw_time.is_empty() {
        return Err(IssueKind::MissingField("event_time"));
    }

    let raw_type = field(record, col_type);
    if raw_type.is_empty() {
        return Err(IssueKind::MissingField("event_type"));
    }

    let timestamp =
        parse_event_time(raw_time).ok_or_else(|| IssueKind::BadTimestamp(raw_time.to_string()))?;

    let kind = EventType::et_from_str(raw_type)
        .ok_or_else(|| IssueKind::BadEventType(raw_type.to_string()))?;

    Ok(GateEvent::new(user_id, timestamp, kind))
}
