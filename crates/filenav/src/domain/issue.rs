use thiserror::Error;

/// Every non-listing state the navigator can surface.
///
/// None of these are fatal. The navigator reports them through
/// [`crate::app::navigator::NavOutcome::RenderMessage`] and the UI decides how
/// to present them.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum NavigationIssue {
    #[error("Error reading storage.")]
    PathUnavailable,
    #[error("Storage access was denied. The browser cannot list directories without it.")]
    AccessDenied,
    #[error("Waiting for storage access.")]
    AccessPending,
    #[error("Storage is not mounted.")]
    MountUnavailable,
    #[error("Unable to read this directory.")]
    EnumerationFailed,
    #[error("Directory is empty.")]
    EmptyDirectory,
    #[error("Only directories can be opened.")]
    NotADirectory,
}

impl NavigationIssue {
    /// Returns whether the issue is a short-lived notice that leaves the
    /// current view untouched.
    pub fn is_transient(self) -> bool {
        self == NavigationIssue::NotADirectory
    }

    /// Returns whether the issue needs an acknowledged dialog instead of an
    /// in-list message.
    pub fn needs_dialog(self) -> bool {
        self == NavigationIssue::AccessDenied
    }

    /// Returns the dialog title used when [`Self::needs_dialog`] is true.
    pub fn title(self) -> &'static str {
        if self.needs_dialog() {
            "Permission denied"
        } else {
            "Storage"
        }
    }
}
