pub mod issue;
pub mod reader;

pub use issue::{IngestReport, IssueKind, RecordIssue};
pub use reader::read_events;
