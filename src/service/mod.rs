//! Remote question source.

mod retrieval;

pub use retrieval::{
    build_request_url, decode_questions, FetchError, FetchHandle, QuestionService,
    DEFAULT_BASE_URL, FILTER_PARAM, QUESTIONS_PATH,
};
