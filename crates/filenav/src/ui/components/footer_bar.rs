use std::path::Path;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::util::{display_path, truncate_with_ellipsis};

/// Bottom bar with the displayed path and, when present, a transient notice.
pub struct FooterBar {
    displayed_path: Option<String>,
    notice: Option<String>,
}

impl FooterBar {
    pub fn new(displayed_path: Option<&Path>, notice: Option<&str>) -> Self {
        Self {
            displayed_path: displayed_path.map(display_path),
            notice: notice.map(str::to_string),
        }
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let total_width = usize::from(area.width);
        let notice_text = self
            .notice
            .as_ref()
            .map(|notice| format!("{} {notice} ", Icon::Warn));
        let notice_width = notice_text.as_deref().map_or(0, UnicodeWidthStr::width);
        let path_text = format!(" Path: {}", self.displayed_path.as_deref().unwrap_or(""));
        let path_text = truncate_with_ellipsis(
            &path_text,
            total_width.saturating_sub(notice_width.saturating_add(1)),
        );
        let path_width = path_text.width();

        let mut spans = vec![Span::styled(
            path_text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        )];

        if let Some(notice_text) = notice_text {
            let padding_width = total_width.saturating_sub(path_width + notice_width);

            spans.push(Span::raw(" ".repeat(padding_width)));
            spans.push(Span::styled(
                notice_text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}
