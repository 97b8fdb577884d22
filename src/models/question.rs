use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One quiz item: a prompt, its correct answer and the wrong alternatives
/// shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Identity assigned by the backend repository, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<u64>,
    pub question: String,
    pub answer: String,
    pub distractors: Vec<String>,
}

/// Ways a record can break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("answer is empty for question {question:?}")]
    EmptyAnswer { question: String },
    #[error("answer {answer:?} is also listed as a distractor")]
    AnswerInDistractors { answer: String },
}

impl QuestionRecord {
    pub fn new<Q, A, I, D>(question: Q, answer: A, distractors: I) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        Self {
            id_number: None,
            question: question.into(),
            answer: answer.into(),
            distractors: distractors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_id(mut self, id_number: u64) -> Self {
        self.id_number = Some(id_number);
        self
    }

    /// Checks the record against its invariants.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.question.trim().is_empty() {
            return Err(RecordError::EmptyQuestion);
        }
        if self.answer.trim().is_empty() {
            return Err(RecordError::EmptyAnswer {
                question: self.question.clone(),
            });
        }
        if self.distractors.iter().any(|d| d == &self.answer) {
            return Err(RecordError::AnswerInDistractors {
                answer: self.answer.clone(),
            });
        }
        Ok(())
    }

    pub fn option_count(&self) -> usize {
        self.distractors.len() + 1
    }

    /// Position of the answer among [`options`](Self::options).
    ///
    /// Derived from the prompt so it stays stable across redraws.
    pub fn answer_slot(&self) -> usize {
        let seed = self
            .question
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
        seed % self.option_count()
    }

    /// The distractors in their original order with the answer spliced in at
    /// [`answer_slot`](Self::answer_slot).
    pub fn options(&self) -> Vec<&str> {
        let mut options: Vec<&str> = self.distractors.iter().map(String::as_str).collect();
        options.insert(self.answer_slot(), self.answer.as_str());
        options
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.answer_slot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> QuestionRecord {
        QuestionRecord::new(
            "Where did I put my keys?",
            "In my pocket.",
            ["In the car.", "On the shelf.", "In the toaster."],
        )
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert_eq!(keys().validate(), Ok(()));
        assert_eq!(QuestionRecord::new("Q", "A", Vec::<String>::new()).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_broken_records() {
        let empty_question = QuestionRecord::new("  ", "A", ["B"]);
        assert_eq!(empty_question.validate(), Err(RecordError::EmptyQuestion));

        let empty_answer = QuestionRecord::new("Q", "", ["B"]);
        assert!(matches!(
            empty_answer.validate(),
            Err(RecordError::EmptyAnswer { .. })
        ));

        let leaked = QuestionRecord::new("Q", "A", ["B", "A"]);
        assert!(matches!(
            leaked.validate(),
            Err(RecordError::AnswerInDistractors { .. })
        ));
    }

    #[test]
    fn test_options_keep_distractor_order_around_answer() {
        let record = keys();
        let options = record.options();
        let slot = record.answer_slot();

        assert_eq!(options.len(), 4);
        assert_eq!(options[slot], "In my pocket.");
        assert!(record.is_correct(slot));

        let rest: Vec<&str> = options
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != slot)
            .map(|(_, o)| *o)
            .collect();
        assert_eq!(rest, vec!["In the car.", "On the shelf.", "In the toaster."]);
    }

    #[test]
    fn test_answer_slot_is_stable() {
        assert_eq!(keys().answer_slot(), keys().answer_slot());
        let lone = QuestionRecord::new("Q", "A", Vec::<String>::new());
        assert_eq!(lone.answer_slot(), 0);
        assert_eq!(lone.options(), vec!["A"]);
    }

    #[test]
    fn test_id_number_is_optional_on_the_wire() {
        let json = r#"{"question":"Q1","answer":"A1","distractors":["D1"]}"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, QuestionRecord::new("Q1", "A1", ["D1"]));
        assert!(!serde_json::to_string(&record).unwrap().contains("id_number"));

        let json = r#"{"id_number":4,"question":"Q1","answer":"A1","distractors":[]}"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id_number, Some(4));
    }
}
