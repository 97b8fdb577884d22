//! Local question sources.

pub mod format;
mod loader;
mod static_provider;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::RecordError;

pub use loader::{load_questions_from_csv, load_questions_from_json, load_questions_from_path};
pub use static_provider::StaticQuestionProvider;

/// Error loading questions from a local file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid question JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("line {line}: {reason}")]
    Csv { line: usize, reason: String },
    #[error("{} must contain at least one question", .0.display())]
    Empty(PathBuf),
    #[error("question #{}: {source}", .index + 1)]
    Invalid {
        index: usize,
        #[source]
        source: RecordError,
    },
}
