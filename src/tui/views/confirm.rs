use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::deletion::prompt::{compose_prompt, CONFIRM_TEXT, MODAL_TITLE};
use crate::tui::app::App;
use crate::tui::theme::Theme;

fn centered(area: Rect, width_pct: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_pct) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

pub fn render_confirm(f: &mut Frame, app: &App, theme: &Theme) {
    let prompt = compose_prompt(app.deletion_request().counts());

    let mut lines = vec![Line::styled(prompt.text, theme.normal_style())];
    if let Some(subtitle) = prompt.subtitle {
        lines.push(Line::raw(""));
        lines.push(Line::styled(subtitle, theme.muted_style()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(format!("y={CONFIRM_TEXT}"), theme.danger_style()),
        Span::raw("  "),
        Span::styled("n/Esc=Cancel", theme.muted_style()),
    ]));

    let area = centered(f.area(), 60, 9);
    f.render_widget(Clear, area);
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(MODAL_TITLE)
                .border_style(theme.danger_style()),
        );
    f.render_widget(para, area);
}
