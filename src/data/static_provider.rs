use std::path::Path;

use crate::models::{QuestionFilter, QuestionRecord};

use super::{load_questions_from_path, LoadError};

/// Fixed, ordered list of questions known at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticQuestionProvider {
    questions: Vec<QuestionRecord>,
}

impl StaticQuestionProvider {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    /// The built-in demo list.
    pub fn builtin() -> Self {
        Self::new(vec![
            QuestionRecord::new(
                "Why doesn't AngularJS support AMD modules?",
                "They didn't want to.",
                [
                    "AMD modules weren't invented yet.",
                    "AMD modules are evil.",
                    "Rick Astley.",
                ],
            ),
            QuestionRecord::new(
                "Where did I put my keys?",
                "In my pocket.",
                ["In the car.", "On the shelf.", "In the toaster."],
            ),
        ])
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self::new(load_questions_from_path(path)?))
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// Records whose question text contains the filter, in original order.
    pub fn filtered(&self, filter: &QuestionFilter) -> Vec<QuestionRecord> {
        self.questions
            .iter()
            .filter(|record| filter.matches(&record.question))
            .cloned()
            .collect()
    }
}

impl Default for StaticQuestionProvider {
    fn default() -> Self {
        Self::builtin()
    }
}
