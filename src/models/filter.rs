use std::fmt;

/// Optional text narrowing which questions a source returns.
///
/// An empty string behaves exactly like no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter(Option<String>);

impl QuestionFilter {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// The value to send, or `None` when the filter is absent or empty.
    pub fn active(&self) -> Option<&str> {
        self.0.as_deref().filter(|value| !value.is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.active().is_some()
    }

    /// Substring match on the question text, as the backend applies `qf`.
    pub fn matches(&self, question: &str) -> bool {
        match self.active() {
            Some(needle) => question.contains(needle),
            None => true,
        }
    }
}

impl From<Option<String>> for QuestionFilter {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for QuestionFilter {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for QuestionFilter {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl fmt::Display for QuestionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.active() {
            Some(value) => write!(f, "{value:?}"),
            None => f.write_str("<none>"),
        }
    }
}
