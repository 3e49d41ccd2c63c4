//! Structured per-record diagnostics.
//! Bad records are skipped, never fatal; callers and tests assert on the
//! collected issues instead of parsing log text.

use crate::models::event::GateEvent;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// A required column is absent or empty.
    MissingField(&'static str),
    /// `event_time` does not match the expected format.
    BadTimestamp(String),
    /// `event_type` is neither gate_in nor gate_out.
    BadEventType(String),
    /// The CSV layer could not read the row at all.
    UnreadableRow(String),
}

/// One skipped input record. `row` is the 1-based data row number
/// (the header is row 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    pub row: usize,
    pub kind: IssueKind,
}

impl RecordIssue {
    pub fn new(row: usize, kind: IssueKind) -> Self {
        Self { row, kind }
    }
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::MissingField(field) => {
                write!(f, "row {}: missing or empty field '{}'", self.row, field)
            }
            IssueKind::BadTimestamp(raw) => {
                write!(f, "row {}: unparseable timestamp '{}'", self.row, raw)
            }
            IssueKind::BadEventType(raw) => {
                write!(f, "row {}: unknown event type '{}'", self.row, raw)
            }
            IssueKind::UnreadableRow(detail) => {
                write!(f, "row {}: unreadable record ({})", self.row, detail)
            }
        }
    }
}

/// Result of one ingest pass: the events that parsed, plus everything that
/// had to be skipped.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub events: Vec<GateEvent>,
    pub issues: Vec<RecordIssue>,
}

impl IngestReport {
    pub fn skipped(&self) -> usize {
        self.issues.len()
    }

    pub fn total_rows(&self) -> usize {
        self.events.len() + self.issues.len()
    }
}
