//! Binds a question source onto the displayed list.

use tracing::{info, warn};

use crate::data::StaticQuestionProvider;
use crate::models::{QuestionFilter, QuestionRecord};
use crate::service::{FetchError, FetchHandle, QuestionService};

/// Where the controller pulls its questions from.
#[derive(Debug, Clone)]
pub enum QuestionSource {
    Static(StaticQuestionProvider),
    Remote(QuestionService),
}

/// Progress of the controller's single load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed(String),
}

/// Owns the displayed list for one page view.
pub struct QuestionsController {
    source: QuestionSource,
    questions_list: Vec<QuestionRecord>,
    status: LoadStatus,
    pending: Option<FetchHandle>,
}

impl QuestionsController {
    /// Starts with an empty list, applies `filter` and issues the load.
    ///
    /// A remote source spawns its request, so this must run inside a Tokio
    /// runtime.
    pub fn new(source: QuestionSource, filter: QuestionFilter) -> Self {
        let mut controller = Self {
            source,
            questions_list: Vec::new(),
            status: LoadStatus::Pending,
            pending: None,
        };
        controller.start(filter);
        controller
    }

    fn start(&mut self, filter: QuestionFilter) {
        match &mut self.source {
            QuestionSource::Static(provider) => {
                let questions = provider.filtered(&filter);
                info!(count = questions.len(), %filter, "bound static questions");
                self.questions_list = questions;
                self.status = LoadStatus::Loaded;
            }
            QuestionSource::Remote(service) => {
                service.set_question_filter(filter);
                self.pending = Some(service.spawn_get_questions());
            }
        }
    }

    pub fn questions_list(&self) -> &[QuestionRecord] {
        &self.questions_list
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies the outcome if the request has finished. Never blocks.
    ///
    /// Returns true when the status changed.
    pub async fn poll(&mut self) -> bool {
        if !self.pending.as_ref().is_some_and(|handle| handle.is_finished()) {
            return false;
        }
        self.settle().await
    }

    /// Waits for the request, if any, and applies its outcome.
    ///
    /// Returns true when the status changed.
    pub async fn settle(&mut self) -> bool {
        let Some(handle) = self.pending.take() else {
            return false;
        };

        match handle.await {
            Ok(outcome) => self.apply(outcome),
            Err(join_error) => {
                warn!(error = %join_error, "question request task did not complete");
                self.status = LoadStatus::Failed(format!("request aborted: {join_error}"));
            }
        }
        true
    }

    fn apply(&mut self, outcome: Result<Vec<QuestionRecord>, FetchError>) {
        match outcome {
            Ok(questions) => {
                info!(count = questions.len(), "bound fetched questions");
                self.questions_list = questions;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                warn!(error = %err, "keeping previous question list");
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_static_source_binds_immediately() {
        let controller = QuestionsController::new(
            QuestionSource::Static(StaticQuestionProvider::builtin()),
            QuestionFilter::none(),
        );
        assert_eq!(controller.status(), &LoadStatus::Loaded);
        assert!(!controller.is_pending());
        assert_eq!(
            controller.questions_list(),
            StaticQuestionProvider::builtin().questions()
        );
    }

    #[test]
    fn test_static_source_honours_filter() {
        let controller = QuestionsController::new(
            QuestionSource::Static(StaticQuestionProvider::builtin()),
            QuestionFilter::text("100"),
        );
        assert_eq!(controller.status(), &LoadStatus::Loaded);
        assert!(controller.questions_list().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_remote_keeps_list_empty() {
        let closed = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = closed.local_addr().unwrap();
        drop(closed);

        let base = Url::parse(&format!("http://{addr}")).unwrap();
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let mut controller = QuestionsController::new(
            QuestionSource::Remote(QuestionService::with_client(http, base)),
            QuestionFilter::text("100"),
        );

        assert!(controller.is_pending());
        assert!(controller.questions_list().is_empty());

        assert!(controller.settle().await);
        assert!(matches!(controller.status(), LoadStatus::Failed(_)));
        assert!(controller.questions_list().is_empty());
        assert!(!controller.settle().await);
    }
}
