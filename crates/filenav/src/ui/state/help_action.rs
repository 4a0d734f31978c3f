/// One user-visible shortcut entry rendered in the browser footer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HelpAction {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
}

impl HelpAction {
    /// Creates one help action descriptor.
    pub(crate) const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Returns browse-mode actions.
///
/// Movement hints are only shown when there are rows to move through.
pub(crate) fn browse_actions(has_listing: bool) -> Vec<HelpAction> {
    let mut actions = vec![
        HelpAction::new("q", "quit"),
        HelpAction::new("Enter", "open"),
        HelpAction::new("Backspace", "back"),
    ];

    if has_listing {
        actions.push(HelpAction::new("j/k", "move"));
        actions.push(HelpAction::new("g/G", "first/last"));
    }

    actions
}

/// Renders `actions` as a compact footer string.
pub(crate) fn footer_text(actions: &[HelpAction]) -> String {
    let mut help_text = String::new();

    for (index, action) in actions.iter().enumerate() {
        if index > 0 {
            help_text.push_str(" | ");
        }

        help_text.push_str(action.key);
        help_text.push_str(": ");
        help_text.push_str(action.label);
    }

    help_text
}
