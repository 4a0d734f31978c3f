//! Plain value types shared by the navigator, infrastructure adapters, and
//! the terminal UI.

pub mod access;
pub mod entry;
pub mod issue;
pub mod navigation;
