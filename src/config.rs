//! Runtime settings: defaults, then an optional TOML file, then environment.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::models::QuestionFilter;
use crate::service::DEFAULT_BASE_URL;

/// File read from the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "quiz-browser.toml";

/// Which source feeds the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The built-in demo list.
    #[default]
    Static,
    /// The `/questions/` HTTP endpoint.
    Remote,
    /// A local JSON or pipe-separated question file.
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceKind,
    pub base_url: String,
    pub filter: Option<String>,
    pub questions_path: Option<PathBuf>,
    pub start_path: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: SourceKind::Static,
            base_url: DEFAULT_BASE_URL.into(),
            filter: None,
            questions_path: None,
            start_path: "/".into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("unknown source {0:?}, expected static, remote or file")]
    Source(String),
    #[error("the file source needs a questions path")]
    MissingQuestionsPath,
}

impl Settings {
    /// Builds settings from `path` (or the default file if present) and the
    /// `QUIZ_BROWSER_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlays values looked up through `var`.
    pub fn apply_env<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("QUIZ_BROWSER_SOURCE") {
            self.source = SourceKind::from_str(&v, true).map_err(|_| ConfigError::Source(v))?;
        }
        if let Some(v) = var("QUIZ_BROWSER_BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = var("QUIZ_BROWSER_FILTER") {
            self.filter = Some(v);
        }
        if let Some(v) = var("QUIZ_BROWSER_QUESTIONS") {
            self.questions_path = Some(PathBuf::from(v));
        }
        if let Some(v) = var("QUIZ_BROWSER_LOG") {
            self.log_filter = v;
        }
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".into()));
        }
        Ok(url)
    }

    pub fn question_filter(&self) -> QuestionFilter {
        QuestionFilter::from(self.filter.clone())
    }

    pub fn questions_path(&self) -> Result<&Path, ConfigError> {
        self.questions_path
            .as_deref()
            .ok_or(ConfigError::MissingQuestionsPath)
    }
}
