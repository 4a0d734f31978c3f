use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

/// Routes one key press to the handler for the active [`AppMode`].
pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Continue;
    }

    if is_interrupt(key) {
        return EventResult::Quit;
    }

    match &app.mode {
        AppMode::Browse => mode::browse::handle(app, key),
        AppMode::ConfirmExit { .. } => mode::exit_confirmation::handle(app, key),
        AppMode::AccessRationale { .. } => mode::access_prompt::handle_rationale(app, key),
        AppMode::AccessPrompt { .. } => mode::access_prompt::handle_prompt(app, key),
        AppMode::Alert { .. } => mode::alert::handle(app, key),
    }
}

/// Returns whether the key is `Ctrl+C`, which quits without confirmation.
fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
