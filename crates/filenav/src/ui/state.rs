//! UI-facing state types shared by the runtime and renderers.

pub mod app_mode;
pub mod help_action;
