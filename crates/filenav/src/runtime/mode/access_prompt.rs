//! Keys for the two-step storage consent flow.
//!
//! The rationale overlay is informational only; dismissing it reveals the
//! yes/no prompt. Answering the prompt replies to the waiting access gate.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::confirmation::{self, ConfirmationDecision, YES_OPTION_INDEX};
use crate::ui::state::app_mode::AppMode;

/// Moves from the rationale overlay to the consent prompt.
pub(crate) fn handle_rationale(app: &mut App, key: KeyEvent) -> EventResult {
    if !matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q' | ' ')
    ) {
        return EventResult::Continue;
    }

    if let AppMode::AccessRationale { request } = std::mem::replace(&mut app.mode, AppMode::Browse)
    {
        app.mode = AppMode::AccessPrompt {
            request,
            selected_confirmation_index: YES_OPTION_INDEX,
        };
    }

    EventResult::Continue
}

/// Answers the consent prompt once the user confirms or cancels.
pub(crate) fn handle_prompt(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::AccessPrompt {
        selected_confirmation_index,
        ..
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    let granted = match confirmation::handle(selected_confirmation_index, key) {
        ConfirmationDecision::Confirm => true,
        ConfirmationDecision::Cancel => false,
        ConfirmationDecision::Continue => return EventResult::Continue,
    };

    if let AppMode::AccessPrompt { request, .. } = std::mem::replace(&mut app.mode, AppMode::Browse)
    {
        info!(granted, "storage access answered");
        request.respond(granted);
    }

    EventResult::Continue
}
