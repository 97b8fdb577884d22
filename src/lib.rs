//! # quiz-browser
//!
//! A single-view terminal browser for quiz questions. Questions come from a
//! built-in list, a local file, or a `/questions/` HTTP endpoint, and are
//! bound onto the main view by [`QuestionsController`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_browser::{Browser, BrowserError, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), BrowserError> {
//!     let settings = Settings::load(None)?;
//!     Browser::from_settings(&settings)?.run().await
//! }
//! ```

mod app;
pub mod config;
pub mod controller;
pub mod data;
pub mod models;
pub mod routing;
pub mod service;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tracing::info;

pub use app::App;
pub use config::{ConfigError, Settings, SourceKind};
pub use controller::{LoadStatus, QuestionSource, QuestionsController};
pub use data::{LoadError, StaticQuestionProvider};
pub use models::{AppState, QuestionFilter, QuestionRecord, RecordError};
pub use routing::{ResolvedRoute, RouteError, Router, View};
pub use service::{FetchError, QuestionService};

/// Redraw period while no input arrives, so a finished load shows up.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for browser operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Builds the source selected by `settings`.
pub fn question_source(settings: &Settings) -> Result<QuestionSource, BrowserError> {
    let source = match settings.source {
        SourceKind::Static => QuestionSource::Static(StaticQuestionProvider::builtin()),
        SourceKind::File => {
            QuestionSource::Static(StaticQuestionProvider::from_path(settings.questions_path()?)?)
        }
        SourceKind::Remote => QuestionSource::Remote(QuestionService::new(settings.base_url()?)),
    };
    Ok(source)
}

/// The main view mounted at its route, ready to run in the terminal.
pub struct Browser {
    app: App,
}

impl Browser {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Resolves the start path and instantiates the controller.
    ///
    /// Must be called inside a Tokio runtime when the source is remote.
    pub fn from_settings(settings: &Settings) -> Result<Self, BrowserError> {
        let route = routing::shell().resolve(&settings.start_path)?;
        info!(path = %route.path, requested = %settings.start_path, "view selected");

        let controller = QuestionsController::new(question_source(settings)?, settings.question_filter());
        Ok(Self::new(App::new(route, controller)))
    }

    /// Takes over the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), BrowserError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app).await
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::BrowserTerminal,
    app: &mut App,
) -> Result<(), BrowserError> {
    let mut events = EventStream::new();
    let mut ticks = tokio::time::interval(TICK_INTERVAL);

    loop {
        app.sync().await;
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = ticks.tick() => {}
            event = events.next() => match event {
                Some(Ok(event)) => {
                    if on_event(app, event) {
                        break;
                    }
                }
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }
    }

    Ok(())
}

/// Returns true if the browser should exit. Only key presses count.
fn on_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_input(app, key.code),
        _ => false,
    }
}

fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Loading | AppState::Failed | AppState::Empty => is_quit(key),
        AppState::Browse => handle_browse_input(app, key),
        AppState::Index => handle_index_input(app, key),
    }
}

fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

fn handle_browse_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Char('n') => {
            app.next_question()
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') | KeyCode::Char('p') => {
            app.previous_question()
        }
        KeyCode::Home | KeyCode::Char('g') => app.first_question(),
        KeyCode::End | KeyCode::Char('G') => app.last_question(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_reveal(),
        KeyCode::Tab | KeyCode::Char('i') => app.toggle_index(),
        key => return is_quit(key),
    }
    false
}

fn handle_index_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.next_question(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_question(),
        KeyCode::Home | KeyCode::Char('g') => app.first_question(),
        KeyCode::End | KeyCode::Char('G') => app.last_question(),
        KeyCode::Enter | KeyCode::Tab | KeyCode::Esc => app.toggle_index(),
        key => return is_quit(key),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn browser() -> Browser {
        Browser::from_settings(&Settings::default()).unwrap()
    }

    #[test]
    fn test_default_settings_browse_builtin_questions() {
        let browser = browser();
        assert_eq!(browser.app().state, AppState::Browse);
        assert_eq!(browser.app().route().path, routing::MAIN_VIEW_PATH);
        assert_eq!(browser.app().total_questions(), 2);
    }

    #[test]
    fn test_keys_step_and_reveal() {
        let mut browser = browser();
        let app = browser.app_mut();

        assert!(!handle_input(app, KeyCode::Enter));
        assert!(app.is_revealed(0));
        assert!(!handle_input(app, KeyCode::Char('l')));
        assert_eq!(app.cursor(), 1);
        assert!(!app.is_revealed(1));
        assert!(!handle_input(app, KeyCode::Left));
        assert_eq!(app.cursor(), 0);

        assert!(handle_input(app, KeyCode::Char('q')));
    }

    #[test]
    fn test_index_opens_selected_record() {
        let mut browser = browser();
        let app = browser.app_mut();

        assert!(!handle_input(app, KeyCode::Tab));
        assert_eq!(app.state, AppState::Index);
        assert!(!handle_input(app, KeyCode::Char('G')));
        assert!(!handle_input(app, KeyCode::Esc));
        assert_eq!(app.state, AppState::Browse);
        assert_eq!(app.cursor(), 1);

        assert!(!handle_input(app, KeyCode::Char('i')));
        assert!(handle_input(app, KeyCode::Char('q')));
    }

    #[test]
    fn test_only_key_presses_are_handled() {
        let mut browser = browser();
        let app = browser.app_mut();

        let release = KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!on_event(app, Event::Key(release)));
        assert!(!on_event(app, Event::Resize(80, 24)));
        assert!(!on_event(app, Event::FocusLost));

        assert!(!on_event(app, Event::Key(KeyEvent::from(KeyCode::Enter))));
        assert!(app.is_revealed(0));
        assert!(on_event(app, Event::Key(KeyEvent::from(KeyCode::Char('q')))));
    }

    #[test]
    fn test_file_source_requires_path() {
        let settings = Settings {
            source: SourceKind::File,
            ..Settings::default()
        };
        assert!(matches!(
            question_source(&settings),
            Err(BrowserError::Config(ConfigError::MissingQuestionsPath))
        ));
    }
}
