pub mod components;
pub mod icon;
pub mod pages;
pub mod state;
pub mod util;

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::ListState;

use crate::app::NavView;
use crate::domain::access::AccessState;
use crate::ui::state::app_mode::AppMode;

const ACCESS_PROMPT_MESSAGE: &str = "Allow filenav to read your storage?";
const ACCESS_PROMPT_TITLE: &str = "Storage access";
const ACCESS_RATIONALE_MESSAGE: &str = "filenav lists the folders and files on your storage.\n\
     Without read access it can only show an error.\n\
     Press Enter to decide again.";
const ACCESS_RATIONALE_TITLE: &str = "Storage permission";
const EXIT_PROMPT_MESSAGE: &str = "Exit the file browser?";
const EXIT_PROMPT_TITLE: &str = "Exit";

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Snapshot of app state needed to draw one frame.
pub struct RenderContext<'a> {
    pub access_state: AccessState,
    pub displayed_path: Option<&'a Path>,
    pub is_awaiting_access: bool,
    pub list_state: &'a mut ListState,
    pub mode: &'a AppMode,
    pub notice: Option<&'a str>,
    pub view: &'a NavView,
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        access_state,
        displayed_path,
        is_awaiting_access,
        list_state,
        mode,
        notice,
        view,
    } = context;

    let area = f.area();

    // Three-section layout: top status bar, content area, footer bar
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Top status bar
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(access_state).render(f, status_bar_area);
    components::footer_bar::FooterBar::new(displayed_path, notice).render(f, footer_bar_area);
    pages::browser::BrowserPage::new(view, displayed_path, is_awaiting_access, list_state)
        .render(f, content_area);

    match mode {
        AppMode::Browse => {}
        AppMode::ConfirmExit {
            selected_confirmation_index,
        } => {
            components::confirmation_overlay::ConfirmationOverlay::new(
                EXIT_PROMPT_TITLE,
                EXIT_PROMPT_MESSAGE,
            )
            .selected_yes(*selected_confirmation_index == 0)
            .render(f, content_area);
        }
        AppMode::AccessRationale { .. } => {
            components::info_overlay::InfoOverlay::new(
                ACCESS_RATIONALE_TITLE,
                ACCESS_RATIONALE_MESSAGE,
            )
            .render(f, content_area);
        }
        AppMode::AccessPrompt {
            selected_confirmation_index,
            ..
        } => {
            components::confirmation_overlay::ConfirmationOverlay::new(
                ACCESS_PROMPT_TITLE,
                ACCESS_PROMPT_MESSAGE,
            )
            .selected_yes(*selected_confirmation_index == 0)
            .render(f, content_area);
        }
        AppMode::Alert { issue } => {
            let message = issue.to_string();
            components::info_overlay::InfoOverlay::new(issue.title(), &message)
                .render(f, content_area);
        }
    }
}
