use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;

/// Handles keys while the directory listing has focus.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => app.request_exit(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.select_highlighted(),
        KeyCode::Backspace | KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => app.go_back(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        _ => {}
    }

    EventResult::Continue
}
