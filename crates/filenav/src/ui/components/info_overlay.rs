use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use crate::ui::Component;
use crate::ui::util::wrap_lines;

const BODY_HORIZONTAL_PADDING: u16 = 2;
const BODY_VERTICAL_PADDING: u16 = 1;
const MIN_OVERLAY_HEIGHT: u16 = 9;
const MIN_OVERLAY_WIDTH: u16 = 44;
const OK_LABEL: &str = " OK ";
const OVERLAY_HEIGHT_PERCENT: u16 = 26;
const OVERLAY_WIDTH_PERCENT: u16 = 52;

/// Centered popup that must be acknowledged with `OK`.
///
/// Used for the storage-permission rationale and for the access-denied
/// notice.
pub struct InfoOverlay<'a> {
    message: &'a str,
    title: &'a str,
}

impl<'a> InfoOverlay<'a> {
    /// Creates an informational popup with title and body message.
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { message, title }
    }

    /// Splits the body message into styled lines and preserves explicit
    /// newline breaks.
    fn message_lines(&self) -> Vec<Line<'a>> {
        let mut message_lines = self
            .message
            .lines()
            .map(|message_line| {
                Line::from(Span::styled(
                    message_line,
                    Style::default().fg(Color::White),
                ))
            })
            .collect::<Vec<_>>();

        if message_lines.is_empty() {
            message_lines.push(Line::from(""));
        }

        message_lines
    }

    /// Returns popup width constrained by overlay defaults and frame bounds.
    fn popup_width(area: Rect) -> u16 {
        (area.width * OVERLAY_WIDTH_PERCENT / 100)
            .max(MIN_OVERLAY_WIDTH)
            .min(area.width)
    }

    /// Returns popup height sized to keep the wrapped body and the `OK` row
    /// visible.
    fn popup_height(&self, area: Rect, width: u16) -> u16 {
        let horizontal_chrome = 2 + (BODY_HORIZONTAL_PADDING * 2);
        let vertical_chrome = 2 + (BODY_VERTICAL_PADDING * 2);
        let inner_width = width.saturating_sub(horizontal_chrome).max(1);
        let min_height = (area.height * OVERLAY_HEIGHT_PERCENT / 100)
            .max(MIN_OVERLAY_HEIGHT)
            .min(area.height);
        let body_with_action = format!("{}\n\n{}", self.message, OK_LABEL.trim());
        let required_inner_lines = wrap_lines(&body_with_action, usize::from(inner_width)).len();
        let required_height =
            u16::try_from(required_inner_lines.saturating_add(usize::from(vertical_chrome)))
                .unwrap_or(area.height)
                .min(area.height);

        required_height.max(min_height)
    }
}

impl Component for InfoOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let width = Self::popup_width(area);
        let title = format!(" {} ", self.title);
        let title_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let ok_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut paragraph_lines = self.message_lines();
        paragraph_lines.push(Line::from(""));
        paragraph_lines
            .push(Line::from(vec![Span::styled(OK_LABEL, ok_style)]).alignment(Alignment::Center));

        let paragraph = Paragraph::new(paragraph_lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow))
                    .padding(Padding::new(
                        BODY_HORIZONTAL_PADDING,
                        BODY_HORIZONTAL_PADDING,
                        BODY_VERTICAL_PADDING,
                        BODY_VERTICAL_PADDING,
                    ))
                    .title(Span::styled(title, title_style))
                    .title_alignment(Alignment::Center),
            );
        let height = self.popup_height(area, width);
        let popup_area = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}
