use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Dismisses the alert on `Enter`, `Esc`, `q` or space.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q' | ' ')
    ) {
        app.mode = AppMode::Browse;
    }

    EventResult::Continue
}
