use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};

use crate::domain::access::AccessState;

/// Boxed async result used by [`AccessGate::request_access`].
pub type AccessFuture = Pin<Box<dyn Future<Output = bool> + Send>>;

/// Storage read-permission boundary.
///
/// Production uses [`PromptAccessGate`], which asks the user through the
/// terminal UI. Tests inject `MockAccessGate`.
#[cfg_attr(test, mockall::automock)]
pub trait AccessGate: Send + Sync {
    /// Returns the current permission decision without prompting.
    fn check_access(&self) -> AccessState;

    /// Starts the consent flow and resolves to `true` when access is granted.
    ///
    /// The flow cannot be cancelled once started.
    fn request_access(&self) -> AccessFuture;

    /// Returns whether an explanation should be shown before asking again.
    fn should_explain_rationale(&self) -> bool;
}

/// One consent question forwarded from [`PromptAccessGate`] to the UI.
#[derive(Debug)]
pub struct AccessRequest {
    /// Whether the UI should explain why access is needed before asking.
    pub rationale: bool,
    reply: oneshot::Sender<bool>,
}

impl AccessRequest {
    /// Delivers the user's answer to the waiting [`AccessFuture`].
    pub fn respond(self, granted: bool) {
        let _ = self.reply.send(granted);
    }
}

#[derive(Debug)]
struct GateState {
    access_state: AccessState,
    denial_count: u32,
}

/// [`AccessGate`] that routes each request to the terminal UI as an
/// [`AccessRequest`] and remembers the answer for later checks.
///
/// A request whose reply is dropped without an answer counts as a denial.
pub struct PromptAccessGate {
    request_tx: mpsc::UnboundedSender<AccessRequest>,
    state: Arc<Mutex<GateState>>,
}

impl PromptAccessGate {
    /// Creates a gate that starts from `initial_state` and posts consent
    /// questions on `request_tx`.
    pub fn new(
        request_tx: mpsc::UnboundedSender<AccessRequest>,
        initial_state: AccessState,
    ) -> Self {
        Self {
            request_tx,
            state: Arc::new(Mutex::new(GateState {
                access_state: initial_state,
                denial_count: 0,
            })),
        }
    }
}

impl AccessGate for PromptAccessGate {
    fn check_access(&self) -> AccessState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .access_state
    }

    fn request_access(&self) -> AccessFuture {
        let (reply, response) = oneshot::channel();
        let request = AccessRequest {
            rationale: self.should_explain_rationale(),
            reply,
        };
        if self.request_tx.send(request).is_err() {
            warn!("access prompt receiver is closed; treating request as denied");
        }

        let state = Arc::clone(&self.state);

        Box::pin(async move {
            let granted = response.await.unwrap_or(false);
            record_decision(&state, granted);

            granted
        })
    }

    fn should_explain_rationale(&self) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        state.denial_count > 0 && !state.access_state.is_granted()
    }
}

/// Stores the outcome of one consent question.
fn record_decision(state: &Mutex<GateState>, granted: bool) {
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    if granted {
        state.access_state = AccessState::Granted;
    } else {
        state.access_state = AccessState::Denied;
        state.denial_count = state.denial_count.saturating_add(1);
    }

    info!(granted, denials = state.denial_count, "storage access decided");
}
