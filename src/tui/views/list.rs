use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::search::SectionKind;
use crate::tags::Tag;
use crate::tui::app::{App, Row};
use crate::tui::theme::Theme;

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x] " } else { "[ ] " }
}

fn row_line<'a>(app: &'a App, row: Row, theme: &Theme) -> Line<'a> {
    match row {
        Row::Section(s) => {
            let section = app.section(s);
            let arrow = if section.expanded { "▾ " } else { "▸ " };
            let mut spans = vec![Span::raw(arrow)];
            if section.kind == SectionKind::Folder {
                spans.push(Span::raw(checkbox(section.checked)));
            }
            spans.push(Span::styled(section.title.as_str(), theme.title_style()));
            Line::from(spans)
        }
        Row::Item(s, i) => {
            let item = app.item(s, i);
            let mut spans = vec![
                Span::raw("    "),
                Span::raw(checkbox(item.checked)),
                Span::raw(item.title.as_str()),
            ];
            for tag in &item.tags {
                spans.push(Span::raw(" "));
                spans.extend(Tag::new(tag.as_str(), theme).spans());
            }
            Line::from(spans)
        }
    }
}

pub fn render_list(f: &mut Frame, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // hint
            Constraint::Min(1),    // results
            Constraint::Length(1), // footer/toast
        ]).split(f.area());

    let title = Paragraph::new(format!("dashprune — {}", app.location))
        .style(theme.title_style());
    f.render_widget(title, chunks[0]);

    let selected = app.deletion_request().counts();
    let hint = match app.query.as_deref() {
        Some(q) => format!("Query: {q}  |  {} folders, {} dashboards selected", selected.folders, selected.dashboards),
        None => format!("{} folders, {} dashboards selected", selected.folders, selected.dashboards),
    };
    f.render_widget(Paragraph::new(hint).style(theme.muted_style()), chunks[1]);

    let items: Vec<ListItem> = app.rows().iter().enumerate().map(|(i, row)| {
        let style = if i == app.selected { theme.selection_style() } else { theme.normal_style() };
        ListItem::new(row_line(app, *row, theme)).style(style)
    }).collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Search results"));
    f.render_widget(list, chunks[2]);

    let footer_text = app
        .toast_message()
        .unwrap_or("q=quit  space=select  a=all  enter=expand  d=delete  r=reload");
    let footer = Paragraph::new(footer_text).style(theme.toast_style());
    f.render_widget(footer, chunks[3]);
}
