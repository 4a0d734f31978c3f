//! App-layer composition root and shared state container.
//!
//! This module wires the [`Navigator`] to the terminal UI. Navigator outcomes
//! are translated into [`AppMode`] changes here, and the asynchronous access
//! flow re-enters the app as an [`AppEvent`].

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use ratatui::widgets::ListState;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::domain::issue::NavigationIssue;
use crate::infra::access::{AccessGate, AccessRequest};
use crate::infra::filesystem::FileSystem;
use crate::infra::mount::MountOracle;
use crate::ui::RenderContext;
use crate::ui::state::app_mode::AppMode;

pub mod navigator;
mod notice;

pub use navigator::{NavOutcome, NavView, Navigator};
pub use notice::{NOTICE_DURATION, Notice};

/// Directory name used for filenav state under the user's home directory.
pub const FILENAV_HOME_DIR: &str = ".filenav";

/// Returns the filenav home directory (`~/.filenav`).
pub fn filenav_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(FILENAV_HOME_DIR);
    }

    PathBuf::from(FILENAV_HOME_DIR)
}

/// Internal app events emitted by background tasks.
///
/// Producers only send events; state mutation is centralized in
/// [`App::apply_app_events`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppEvent {
    /// The storage access flow finished with the user's decision.
    AccessResolved { granted: bool },
}

/// External collaborators injected into [`App`].
#[derive(Clone)]
pub struct AppServices {
    access_gate: Arc<dyn AccessGate>,
    file_system: Arc<dyn FileSystem>,
    mount_oracle: Arc<dyn MountOracle>,
}

impl AppServices {
    pub fn new(
        access_gate: Arc<dyn AccessGate>,
        file_system: Arc<dyn FileSystem>,
        mount_oracle: Arc<dyn MountOracle>,
    ) -> Self {
        Self {
            access_gate,
            file_system,
            mount_oracle,
        }
    }
}

/// Stateful application model used by the runtime loop.
pub struct App {
    pub list_state: ListState,
    pub mode: AppMode,
    access_gate: Arc<dyn AccessGate>,
    access_request_in_flight: bool,
    app_event_rx: mpsc::UnboundedReceiver<AppEvent>,
    app_event_tx: mpsc::UnboundedSender<AppEvent>,
    navigator: Navigator,
    notice: Option<Notice>,
}

impl App {
    /// Creates an app rooted at `storage_root`.
    ///
    /// Nothing is listed until [`App::start`] runs.
    pub fn new(storage_root: PathBuf, services: AppServices) -> Self {
        let AppServices {
            access_gate,
            file_system,
            mount_oracle,
        } = services;
        let (app_event_tx, app_event_rx) = mpsc::unbounded_channel();
        let navigator = Navigator::new(
            storage_root,
            file_system,
            mount_oracle,
            Arc::clone(&access_gate),
        );

        Self {
            list_state: ListState::default(),
            mode: AppMode::Browse,
            access_gate,
            access_request_in_flight: false,
            app_event_rx,
            app_event_tx,
            navigator,
            notice: None,
        }
    }

    /// Lists the storage root.
    ///
    /// Must run inside a tokio runtime because a missing permission spawns
    /// the access flow.
    pub fn start(&mut self) {
        info!(root = %self.navigator.storage_root().display(), "starting storage browser");
        let outcome = self.navigator.start();

        self.apply_outcome(outcome);
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Returns whether an access request is waiting for an answer.
    #[cfg(test)]
    pub(crate) fn is_awaiting_access(&self) -> bool {
        self.access_request_in_flight
    }

    /// Returns the active footer notice, if any.
    #[cfg(test)]
    pub(crate) fn notice_message(&self) -> Option<&str> {
        self.notice.as_ref().map(Notice::message)
    }

    /// Opens the highlighted row, or handles a tap on an empty view.
    pub fn select_highlighted(&mut self) {
        let selected_index = self.list_state.selected().unwrap_or_default();
        let outcome = self.navigator.select_index(selected_index);

        self.apply_outcome(outcome);
    }

    /// Moves one directory up or asks to confirm exit at the top level.
    pub fn go_back(&mut self) {
        let outcome = self.navigator.go_back();

        self.apply_outcome(outcome);
    }

    /// Opens the exit confirmation regardless of depth.
    pub fn request_exit(&mut self) {
        self.apply_outcome(NavOutcome::ConfirmExit);
    }

    /// Moves the highlight by `offset` rows, clamped to the listing.
    pub fn move_selection(&mut self, offset: isize) {
        let row_count = self.row_count();
        if row_count == 0 {
            return;
        }

        let current_index = self.list_state.selected().unwrap_or_default();
        let next_index = if offset.is_negative() {
            current_index.saturating_sub(offset.unsigned_abs())
        } else {
            current_index
                .saturating_add(offset.unsigned_abs())
                .min(row_count - 1)
        };

        self.list_state.select(Some(next_index));
    }

    pub fn select_first(&mut self) {
        if self.row_count() > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let row_count = self.row_count();
        if row_count > 0 {
            self.list_state.select(Some(row_count - 1));
        }
    }

    /// Shows the consent UI for one access request.
    pub fn show_access_request(&mut self, request: AccessRequest) {
        self.mode = if request.rationale {
            AppMode::AccessRationale { request }
        } else {
            AppMode::AccessPrompt {
                request,
                selected_confirmation_index: 0,
            }
        };
    }

    /// Applies every queued [`AppEvent`].
    pub fn apply_app_events(&mut self) {
        while let Ok(event) = self.app_event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    /// Drops the footer notice once it has been visible long enough.
    pub fn clear_expired_notice(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired_at(now))
        {
            self.notice = None;
        }
    }

    /// Borrows everything the UI needs to draw one frame.
    pub fn render_context(&mut self) -> RenderContext<'_> {
        RenderContext {
            access_state: self.navigator.access_state(),
            displayed_path: self.navigator.displayed_path(),
            is_awaiting_access: self.access_request_in_flight,
            list_state: &mut self.list_state,
            mode: &self.mode,
            notice: self.notice.as_ref().map(Notice::message),
            view: self.navigator.view(),
        }
    }

    fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AccessResolved { granted } => {
                self.access_request_in_flight = false;
                let outcome = self.navigator.on_access_result(granted);

                self.apply_outcome(outcome);
            }
        }
    }

    /// Translates one navigator outcome into UI state.
    fn apply_outcome(&mut self, outcome: NavOutcome) {
        debug!(?outcome, "navigator outcome");

        match outcome {
            NavOutcome::RenderListing => {
                self.mode = AppMode::Browse;
                self.list_state.select(Some(0));
            }
            NavOutcome::RenderMessage(issue) => self.show_issue(issue),
            NavOutcome::AccessPending => self.request_access(),
            NavOutcome::ConfirmExit => {
                self.mode = AppMode::ConfirmExit {
                    selected_confirmation_index: 1,
                };
            }
            NavOutcome::Unchanged => {}
        }
    }

    fn show_issue(&mut self, issue: NavigationIssue) {
        if issue.is_transient() {
            self.notice = Some(Notice::new(issue.to_string(), Instant::now()));

            return;
        }

        self.list_state.select(None);
        if issue.needs_dialog() {
            self.mode = AppMode::Alert { issue };
        }
    }

    /// Starts the access flow unless one is already waiting for an answer.
    fn request_access(&mut self) {
        if self.access_request_in_flight {
            debug!("access request already in flight");

            return;
        }

        self.access_request_in_flight = true;
        let response = self.access_gate.request_access();
        let app_event_tx = self.app_event_tx.clone();
        tokio::spawn(async move {
            let granted = response.await;
            let _ = app_event_tx.send(AppEvent::AccessResolved { granted });
        });
    }

    fn row_count(&self) -> usize {
        self.navigator.listing().map_or(0, |listing| listing.len())
    }
}
