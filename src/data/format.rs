//! Question file formats: a JSON array and a pipe-separated table.

use std::io;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::models::QuestionRecord;

use super::LoadError;

pub const CSV_HEADER: [&str; 4] = ["id", "question", "answer", "distractors"];
const DELIMITER: u8 = b'|';
const DISTRACTOR_SEPARATOR: &str = ", ";

pub fn parse_json(content: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    Ok(serde_json::from_str(content)?)
}

pub fn to_json(questions: &[QuestionRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(questions)
}

/// Parses pipe-separated rows.
///
/// Rows hold either `question|answer|distractors` or a leading id column.
/// Fields containing `|` are double-quoted. A header is only recognised on
/// the first row; blank lines are skipped.
///
/// The distractor column is split on `", "`, so a distractor that itself
/// contains `", "` comes back as several distractors. Use JSON for such data.
pub fn parse_csv(content: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut questions = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|err| LoadError::Csv {
            line: err.position().map_or(index + 1, |p| p.line() as usize),
            reason: err.to_string(),
        })?;
        let line = row.position().map_or(index + 1, |p| p.line() as usize);

        if index == 0 && is_header(&row) {
            continue;
        }
        questions.push(record_from_row(&row, line)?);
    }

    Ok(questions)
}

fn record_from_row(row: &StringRecord, line: usize) -> Result<QuestionRecord, LoadError> {
    let fields: Vec<&str> = row.iter().collect();
    let (id, question, answer, distractors) = match fields.as_slice() {
        [question, answer, distractors] => (None, *question, *answer, *distractors),
        [id, question, answer, distractors] => (Some(*id), *question, *answer, *distractors),
        _ => {
            return Err(LoadError::Csv {
                line,
                reason: format!("expected 3 or 4 columns, found {}", fields.len()),
            });
        }
    };

    let id_number = match id.map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<u64>().map_err(|_| LoadError::Csv {
            line,
            reason: format!("invalid id {:?}", raw),
        })?),
    };

    let distractors = if distractors.is_empty() {
        Vec::new()
    } else {
        distractors
            .split(DISTRACTOR_SEPARATOR)
            .map(str::to_string)
            .collect()
    };

    Ok(QuestionRecord {
        id_number,
        question: question.to_string(),
        answer: answer.to_string(),
        distractors,
    })
}

fn is_header(row: &StringRecord) -> bool {
    let fields: Vec<String> = row.iter().map(str::to_ascii_lowercase).collect();
    fields == CSV_HEADER || fields == CSV_HEADER[1..]
}

/// Writes the pipe-separated table with its header row.
pub fn to_csv(questions: &[QuestionRecord]) -> csv::Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::with_capacity(64 * (questions.len() + 1)));

    writer.write_record(CSV_HEADER)?;
    for question in questions {
        let id = question
            .id_number
            .map(|id| id.to_string())
            .unwrap_or_default();
        writer.write_record([
            id.as_str(),
            question.question.as_str(),
            question.answer.as_str(),
            question.distractors.join(DISTRACTOR_SEPARATOR).as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|err| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_accepts_both_row_shapes() {
        let content = "id|question|answer|distractors\n\
                       1|Where did I put my keys?|In my pocket.|In the car., On the shelf.\n\
                       \n\
                       Q2|A2|D1\n";
        let questions = parse_csv(content).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id_number, Some(1));
        assert_eq!(questions[0].distractors, vec!["In the car.", "On the shelf."]);
        assert_eq!(questions[1], QuestionRecord::new("Q2", "A2", ["D1"]));
    }

    #[test]
    fn test_header_only_skipped_on_first_row() {
        let questions = parse_csv("1|Q1|A1|D1\nquestion|answer|distractors\n").unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].question, "question");
        assert_eq!(questions[1].distractors, vec!["distractors"]);
    }

    #[test]
    fn test_parse_csv_reports_line_of_bad_row() {
        let err = parse_csv("Q1|A1|D1\nonly|two\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv { line: 2, .. }), "unexpected error: {err}");

        let err = parse_csv("x|Q|A|D\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv { line: 1, .. }), "unexpected error: {err}");
    }

    #[test]
    fn test_empty_distractor_column_means_no_distractors() {
        let questions = parse_csv("Q|A|\n").unwrap();
        assert!(questions[0].distractors.is_empty());
    }

    #[test]
    fn test_pipes_inside_fields_survive_export() {
        let questions = vec![
            QuestionRecord::new("Is a|b valid?", "Yes", ["No", "Only \"quoted\""]).with_id(3),
            QuestionRecord::new("Q2", "A2", Vec::<String>::new()),
        ];
        let csv = to_csv(&questions).unwrap();

        assert!(csv.starts_with("id|question|answer|distractors\n"));
        assert!(csv.contains("\"Is a|b valid?\""), "field not quoted: {csv}");
        assert_eq!(parse_csv(&csv).unwrap(), questions);
    }

    #[test]
    fn test_distractor_with_separator_is_split() {
        let questions = vec![QuestionRecord::new("Capital?", "Paris", ["Lyon, France"])];
        let parsed = parse_csv(&to_csv(&questions).unwrap()).unwrap();
        assert_eq!(parsed[0].distractors, vec!["Lyon", "France"]);
    }

    #[test]
    fn test_parse_json_rejects_non_array() {
        assert!(matches!(
            parse_json(r#"{"question":"Q"}"#),
            Err(LoadError::Parse(_))
        ));
    }
}
