use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::NavView;
use crate::domain::entry::Entry;
use crate::domain::issue::NavigationIssue;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::state::help_action;
use crate::ui::util::display_path;

const CONTENT_FOOTER_HEIGHT: u16 = 1;
const CONTENT_MARGIN: u16 = 1;
const DEFAULT_TITLE: &str = "Storage";

/// Renders the current directory listing, or the message that replaces it.
pub struct BrowserPage<'a> {
    displayed_path: Option<&'a Path>,
    is_awaiting_access: bool,
    list_state: &'a mut ListState,
    view: &'a NavView,
}

impl<'a> BrowserPage<'a> {
    pub fn new(
        view: &'a NavView,
        displayed_path: Option<&'a Path>,
        is_awaiting_access: bool,
        list_state: &'a mut ListState,
    ) -> Self {
        Self {
            displayed_path,
            is_awaiting_access,
            list_state,
            view,
        }
    }

    fn title(&self) -> String {
        let title = self
            .displayed_path
            .map_or_else(|| DEFAULT_TITLE.to_string(), display_path);

        format!(" {title} ")
    }

    /// Returns the single line shown when no listing is available.
    fn message_line(&self) -> Line<'static> {
        match self.view {
            NavView::Message(issue) => issue_line(*issue),
            NavView::Blank if self.is_awaiting_access => Line::from(vec![
                Span::styled(
                    format!("{} ", Icon::current_spinner()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    NavigationIssue::AccessPending.to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            NavView::Blank | NavView::Listing(_) => Line::from(""),
        }
    }
}

/// Styles one navigation issue shown in place of the listing.
fn issue_line(issue: NavigationIssue) -> Line<'static> {
    let color = match issue {
        NavigationIssue::EmptyDirectory => Color::DarkGray,
        _ => Color::Red,
    };
    let icon = match issue {
        NavigationIssue::EmptyDirectory => None,
        NavigationIssue::AccessDenied | NavigationIssue::AccessPending => Some(Icon::Locked),
        _ => Some(Icon::Warn),
    };

    let mut spans = Vec::new();
    if let Some(icon) = icon {
        spans.push(Span::styled(format!("{icon} "), Style::default().fg(color)));
    }
    spans.push(Span::styled(issue.to_string(), Style::default().fg(color)));

    Line::from(spans)
}

/// Formats one listing row with its type icon and a trailing `/` for
/// directories.
fn entry_item(entry: &Entry) -> ListItem<'static> {
    let icon = Icon::for_entry(entry.is_dir);
    let suffix = if entry.is_dir { "/" } else { "" };
    let color = if entry.is_dir {
        Color::Yellow
    } else {
        Color::Cyan
    };

    ListItem::new(Span::styled(
        format!("{icon} {}{suffix}", entry.name),
        Style::default().fg(color),
    ))
}

impl Page for BrowserPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(CONTENT_FOOTER_HEIGHT),
            ])
            .margin(CONTENT_MARGIN)
            .split(area);
        let content_area = chunks[0];
        let footer_area = chunks[1];

        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            self.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

        let has_listing = if let NavView::Listing(listing) = self.view {
            let items: Vec<ListItem<'_>> = listing.entries().iter().map(entry_item).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");
            f.render_stateful_widget(list, content_area, &mut *self.list_state);

            true
        } else {
            let paragraph = Paragraph::new(self.message_line()).block(block);
            f.render_widget(paragraph, content_area);

            false
        };

        let help_text = help_action::footer_text(&help_action::browse_actions(has_listing));
        let help_message = Paragraph::new(help_text).style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, footer_area);
    }
}
