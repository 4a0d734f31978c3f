use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::access::AccessState;
use crate::ui::Component;

/// Top bar showing the app version and the storage access decision.
pub struct StatusBar {
    access_state: AccessState,
}

impl StatusBar {
    pub fn new(access_state: AccessState) -> Self {
        Self { access_state }
    }

    fn access_color(&self) -> Color {
        match self.access_state {
            AccessState::Granted => Color::Green,
            AccessState::Denied => Color::Red,
            AccessState::Unknown => Color::Gray,
        }
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" Filenav v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let right_text = format!("Access: {} ", self.access_state);
        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.len()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            Span::styled(right_text, Style::default().fg(self.access_color())),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}
