use crate::domain::issue::NavigationIssue;
use crate::infra::access::AccessRequest;

/// Interaction mode of the terminal UI.
///
/// Every mode except [`AppMode::Browse`] draws an overlay on top of the
/// browser page and captures all key input.
#[derive(Debug)]
pub enum AppMode {
    Browse,
    ConfirmExit {
        selected_confirmation_index: usize,
    },
    /// Explains why storage access is needed before asking again.
    AccessRationale {
        request: AccessRequest,
    },
    /// Yes/no consent question for storage access.
    AccessPrompt {
        request: AccessRequest,
        selected_confirmation_index: usize,
    },
    /// Persistent notice that must be acknowledged.
    Alert {
        issue: NavigationIssue,
    },
}
