use std::time::{Duration, Instant};

/// How long a transient notice stays in the footer.
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Short-lived footer message, the terminal counterpart of a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    expires_at: Instant,
    message: String,
}

impl Notice {
    /// Creates a notice that expires [`NOTICE_DURATION`] after `now`.
    pub fn new(message: String, now: Instant) -> Self {
        Self {
            expires_at: now + NOTICE_DURATION,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
