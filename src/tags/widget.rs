use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use super::color::{derive_color, ColorPair};
use crate::tui::theme::Theme;

const LEFT_EDGE: &str = "▐";
const RIGHT_EDGE: &str = "▌";

/// A tag label colored by its name.
pub struct Tag<'a> {
    name: &'a str,
    colors: ColorPair,
    text_style: Style,
}

impl<'a> Tag<'a> {
    pub fn new(name: &'a str, theme: &Theme) -> Self {
        Self {
            name,
            colors: derive_color(name),
            text_style: theme.tag_text_style(),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    /// Inline form for list rows: the name on its background, framed by
    /// half-blocks in the border color.
    pub fn spans(&self) -> Vec<Span<'a>> {
        let edge = Style::default().fg(self.colors.border_color);
        vec![
            Span::styled(LEFT_EDGE, edge),
            Span::styled(self.name, self.text_style.bg(self.colors.color)),
            Span::styled(RIGHT_EDGE, edge),
        ]
    }
}

/// Renders a row of tags separated by a single space.
pub fn tag_line<'a>(names: &'a [String], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.extend(Tag::new(name.as_str(), theme).spans());
    }
    Line::from(spans)
}

impl Widget for Tag<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.border_color))
            .style(Style::default().bg(self.colors.color));
        Paragraph::new(self.name)
            .style(self.text_style.bg(self.colors.color))
            .block(block)
            .render(area, buf);
    }
}
