use crate::controller::{LoadStatus, QuestionsController};
use crate::models::{AppState, QuestionRecord};
use crate::routing::ResolvedRoute;

/// View model of the main view: the controller's list plus a cursor into it
/// and which answers the reader has uncovered.
pub struct App {
    pub state: AppState,
    route: ResolvedRoute,
    controller: QuestionsController,
    cursor: usize,
    revealed: Vec<bool>,
}

impl App {
    pub fn new(route: ResolvedRoute, controller: QuestionsController) -> Self {
        let mut app = Self {
            state: AppState::Loading,
            route,
            controller,
            cursor: 0,
            revealed: Vec::new(),
        };
        app.bind();
        app
    }

    /// Picks up a finished load. Called once per UI tick.
    pub async fn sync(&mut self) {
        if self.controller.poll().await {
            self.bind();
        }
    }

    fn bind(&mut self) {
        self.state = match self.controller.status() {
            LoadStatus::Pending => AppState::Loading,
            LoadStatus::Failed(_) => AppState::Failed,
            LoadStatus::Loaded if self.questions().is_empty() => AppState::Empty,
            LoadStatus::Loaded => AppState::Browse,
        };
        self.cursor = 0;
        self.revealed = vec![false; self.questions().len()];
    }

    pub fn route(&self) -> &ResolvedRoute {
        &self.route
    }

    pub fn failure(&self) -> Option<&str> {
        match self.controller.status() {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        self.controller.questions_list()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions().get(self.cursor)
    }

    pub fn total_questions(&self) -> usize {
        self.questions().len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|shown| **shown).count()
    }

    pub fn toggle_reveal(&mut self) {
        if let Some(shown) = self.revealed.get_mut(self.cursor) {
            *shown = !*shown;
        }
    }

    pub fn next_question(&mut self) {
        let last = self.total_questions().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    pub fn previous_question(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn first_question(&mut self) {
        self.cursor = 0;
    }

    pub fn last_question(&mut self) {
        self.cursor = self.total_questions().saturating_sub(1);
    }

    /// Switches between the single-record view and the list, keeping the cursor.
    pub fn toggle_index(&mut self) {
        self.state = match self.state {
            AppState::Browse => AppState::Index,
            AppState::Index => AppState::Browse,
            other => other,
        };
    }
}
