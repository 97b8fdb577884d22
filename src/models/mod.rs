mod filter;
mod question;

pub use filter::QuestionFilter;
pub use question::{QuestionRecord, RecordError};

/// Screens of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the controller's source to deliver.
    Loading,
    /// The source failed; the list stays as it was.
    Failed,
    /// The source delivered zero records.
    Empty,
    /// One record at a time, answer hidden until revealed.
    Browse,
    /// Every record on one scrollable list.
    Index,
}
