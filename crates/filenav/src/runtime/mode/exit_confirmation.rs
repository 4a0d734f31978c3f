use crossterm::event::KeyEvent;
use tracing::info;

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::confirmation::{self, ConfirmationDecision};
use crate::ui::state::app_mode::AppMode;

/// Handles keys while the exit overlay is open.
///
/// Cancelling returns to browsing without touching the navigation stack.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::ConfirmExit {
        selected_confirmation_index,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match confirmation::handle(selected_confirmation_index, key) {
        ConfirmationDecision::Confirm => {
            info!("exit confirmed");

            EventResult::Quit
        }
        ConfirmationDecision::Cancel => {
            app.mode = AppMode::Browse;

            EventResult::Continue
        }
        ConfirmationDecision::Continue => EventResult::Continue,
    }
}
