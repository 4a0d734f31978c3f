use crossterm::event::{KeyCode, KeyEvent};

pub(crate) const YES_OPTION_INDEX: usize = 0;
pub(crate) const NO_OPTION_INDEX: usize = 1;

/// What a yes/no selector should do after one key press.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum ConfirmationDecision {
    Confirm,
    Cancel,
    Continue,
}

/// Applies one key press to a yes/no selector.
///
/// `y` confirms, `n`/`q`/`Esc` cancel, `Left`/`h` and `Right`/`l` move the
/// highlight, `Tab` toggles it and `Enter` answers with the highlighted
/// option.
pub(crate) fn handle(selected_confirmation_index: &mut usize, key: KeyEvent) -> ConfirmationDecision {
    match key.code {
        KeyCode::Enter => decision_for_index(*selected_confirmation_index),
        KeyCode::Esc => ConfirmationDecision::Cancel,
        KeyCode::Left => move_to(selected_confirmation_index, YES_OPTION_INDEX),
        KeyCode::Right => move_to(selected_confirmation_index, NO_OPTION_INDEX),
        KeyCode::Tab => {
            let toggled_index = if *selected_confirmation_index == YES_OPTION_INDEX {
                NO_OPTION_INDEX
            } else {
                YES_OPTION_INDEX
            };

            move_to(selected_confirmation_index, toggled_index)
        }
        KeyCode::Char(character) => match character.to_ascii_lowercase() {
            'y' => ConfirmationDecision::Confirm,
            'n' | 'q' => ConfirmationDecision::Cancel,
            'h' => move_to(selected_confirmation_index, YES_OPTION_INDEX),
            'l' => move_to(selected_confirmation_index, NO_OPTION_INDEX),
            _ => ConfirmationDecision::Continue,
        },
        _ => ConfirmationDecision::Continue,
    }
}

fn decision_for_index(selected_confirmation_index: usize) -> ConfirmationDecision {
    if selected_confirmation_index == YES_OPTION_INDEX {
        ConfirmationDecision::Confirm
    } else {
        ConfirmationDecision::Cancel
    }
}

fn move_to(selected_confirmation_index: &mut usize, target_index: usize) -> ConfirmationDecision {
    *selected_confirmation_index = target_index;

    ConfirmationDecision::Continue
}
