//! HTTP retrieval of questions from the `/questions/` endpoint.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use crate::models::{QuestionFilter, QuestionRecord};

/// Path of the question collection, relative to the base URL.
pub const QUESTIONS_PATH: &str = "questions/";

/// Query parameter carrying the question text filter.
pub const FILTER_PARAM: &str = "qf";

/// Default location of a locally running question backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Outcome of a failed retrieval.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: Url, status: StatusCode },
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: Url, reason: String },
}

pub type FetchHandle = JoinHandle<Result<Vec<QuestionRecord>, FetchError>>;

/// Client for the question endpoint.
///
/// The filter lives on the instance; each clone carries its own copy.
#[derive(Debug, Clone)]
pub struct QuestionService {
    http: Client,
    base_url: Url,
    filter: QuestionFilter,
}

impl QuestionService {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            filter: QuestionFilter::none(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replaces the filter used by subsequent [`get_questions`](Self::get_questions) calls.
    pub fn set_question_filter(&mut self, filter: impl Into<QuestionFilter>) {
        self.filter = filter.into();
        debug!(filter = %self.filter, "question filter set");
    }

    pub fn question_filter(&self) -> &QuestionFilter {
        &self.filter
    }

    /// The URL `get_questions` would request right now.
    pub fn request_url(&self) -> Url {
        build_request_url(&self.base_url, &self.filter)
    }

    /// Fetches the questions using the stored filter.
    pub async fn get_questions(&self) -> Result<Vec<QuestionRecord>, FetchError> {
        self.get_questions_with(&self.filter).await
    }

    /// Fetches the questions using `filter` for this call only.
    pub async fn get_questions_with(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<QuestionRecord>, FetchError> {
        let url = build_request_url(&self.base_url, filter);
        info!(%url, "fetching questions");

        let response = match self.http.get(url.clone()).send().await {
            Ok(response) => response,
            Err(source) => {
                warn!(%url, error = %source, "question request failed");
                return Err(FetchError::Transport { url, source });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "question request rejected");
            return Err(FetchError::Status { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let questions = decode_questions(&body).map_err(|reason| {
            warn!(%url, %reason, "question response rejected");
            FetchError::MalformedResponse { url, reason }
        })?;

        info!(count = questions.len(), "questions fetched");
        Ok(questions)
    }

    /// Issues the request on the runtime and returns the in-flight handle.
    ///
    /// The filter is captured now; later calls to `set_question_filter` do not
    /// affect a request already spawned.
    pub fn spawn_get_questions(&self) -> FetchHandle {
        let service = self.clone();
        tokio::spawn(async move { service.get_questions().await })
    }
}

/// Builds `<base>/questions/`, adding `qf=<filter>` only for an active filter.
pub fn build_request_url(base: &Url, filter: &QuestionFilter) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = match base.join(QUESTIONS_PATH) {
        Ok(url) => url,
        // Only cannot-be-a-base URLs fail here, and those are rejected by config.
        Err(_) => base,
    };

    url.set_query(None);
    if let Some(value) = filter.active() {
        url.query_pairs_mut().append_pair(FILTER_PARAM, value);
    }
    url
}

/// Decodes a response body, rejecting anything that is not an array of valid records.
pub fn decode_questions(body: &str) -> Result<Vec<QuestionRecord>, String> {
    let questions: Vec<QuestionRecord> =
        serde_json::from_str(body).map_err(|e| format!("expected an array of questions: {e}"))?;

    for (index, question) in questions.iter().enumerate() {
        question
            .validate()
            .map_err(|e| format!("question #{}: {e}", index + 1))?;
    }

    Ok(questions)
}
