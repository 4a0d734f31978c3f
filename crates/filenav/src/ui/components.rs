//! Reusable widgets drawn on top of or around pages.

pub mod confirmation_overlay;
pub mod footer_bar;
pub mod info_overlay;
pub mod status_bar;
