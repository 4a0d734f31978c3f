//! `AppMode`-specific key handling modules.

pub(crate) mod access_prompt;
pub(crate) mod alert;
pub(crate) mod browse;
pub(crate) mod confirmation;
pub(crate) mod exit_confirmation;
