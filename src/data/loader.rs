use std::fs;
use std::path::Path;

use tracing::info;

use crate::models::QuestionRecord;

use super::format::{parse_csv, parse_json};
use super::LoadError;

/// Loads questions from a JSON array file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    checked(path, parse_json(&content)?)
}

/// Loads questions from a pipe-separated file.
pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    checked(path, parse_csv(&content)?)
}

/// Picks the format from the file extension; anything but `.csv` is JSON.
pub fn load_questions_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        load_questions_from_csv(path)
    } else {
        load_questions_from_json(path)
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn checked(path: &Path, questions: Vec<QuestionRecord>) -> Result<Vec<QuestionRecord>, LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    for (index, question) in questions.iter().enumerate() {
        question
            .validate()
            .map_err(|source| LoadError::Invalid { index, source })?;
    }

    info!(path = %path.display(), count = questions.len(), "loaded question file");
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("quiz-browser-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_by_extension() {
        let json = scratch_file(
            "load.json",
            r#"[{"question":"Q1","answer":"A1","distractors":["D1"]}]"#,
        );
        let csv = scratch_file("load.csv", "id|question|answer|distractors\n7|Q1|A1|D1\n");

        let from_json = load_questions_from_path(&json).unwrap();
        let from_csv = load_questions_from_path(&csv).unwrap();

        assert_eq!(from_json, vec![QuestionRecord::new("Q1", "A1", ["D1"])]);
        assert_eq!(from_csv, vec![QuestionRecord::new("Q1", "A1", ["D1"]).with_id(7)]);

        let _ = fs::remove_file(json);
        let _ = fs::remove_file(csv);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let path = scratch_file("empty.json", "[]");
        assert!(matches!(
            load_questions_from_json(&path),
            Err(LoadError::Empty(_))
        ));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_invalid_record_reports_index() {
        let path = scratch_file("invalid.csv", "Q1|A1|D1\nQ2|A2|A2\n");
        assert!(matches!(
            load_questions_from_csv(&path),
            Err(LoadError::Invalid { index: 1, .. })
        ));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_questions_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
