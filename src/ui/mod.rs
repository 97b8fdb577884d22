mod index;
mod question;
mod status;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Loading => status::render_loading(frame, area, app),
        AppState::Failed => status::render_failed(frame, area, app),
        AppState::Empty => status::render_empty(frame, area, app),
        AppState::Browse => question::render(frame, area, app),
        AppState::Index => index::render(frame, area, app),
    }
}
