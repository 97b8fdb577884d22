//! Path-to-view resolution with a single catch-all redirect.

use thiserror::Error;
use tracing::debug;

/// Path of the only view.
pub const MAIN_VIEW_PATH: &str = "/mainView";

/// Views the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Main,
}

/// A path resolved to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Path the view is mounted at, after any redirect.
    pub path: String,
    pub view: View,
    /// Set when the requested path differed and `otherwise` applied.
    pub redirected_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches {0:?}")]
    Unmatched(String),
}

/// Route table: exact path matches plus an optional fallback redirect.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<(String, View)>,
    otherwise: Option<String>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, path: impl Into<String>, view: View) -> Self {
        self.routes.push((path.into(), view));
        self
    }

    pub fn otherwise(mut self, redirect_to: impl Into<String>) -> Self {
        self.otherwise = Some(redirect_to.into());
        self
    }

    /// Resolves `path`, following the fallback redirect at most once.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, RouteError> {
        if let Some(view) = self.lookup(path) {
            return Ok(ResolvedRoute {
                path: path.to_string(),
                view,
                redirected_from: None,
            });
        }

        let target = self
            .otherwise
            .as_deref()
            .ok_or_else(|| RouteError::Unmatched(path.to_string()))?;
        let view = self
            .lookup(target)
            .ok_or_else(|| RouteError::Unmatched(target.to_string()))?;

        debug!(from = path, to = target, "redirecting unmatched route");
        Ok(ResolvedRoute {
            path: target.to_string(),
            view,
            redirected_from: Some(path.to_string()),
        })
    }

    fn lookup(&self, path: &str) -> Option<View> {
        self.routes
            .iter()
            .find(|(route, _)| route == path)
            .map(|(_, view)| *view)
    }
}

/// The application's shell: everything lands on the main view.
pub fn shell() -> Router {
    Router::new()
        .when(MAIN_VIEW_PATH, View::Main)
        .otherwise(MAIN_VIEW_PATH)
}
