use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2)])
        .split(area);

    if let Some(help) = ctx.help {
        let actions = Paragraph::new(format!("Actions: {help}"))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(actions, rows[0]);
    }

    let mut status = ctx.status_message.to_string();
    if ctx.roster.is_dirty() {
        status.push_str(" • unsaved changes");
    }
    if let Some(warning) = ctx.warning {
        status.push_str(" • ");
        status.push_str(warning);
    }
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }

    let badge = if ctx.warning.is_some() {
        Span::styled("[!]", Style::default().fg(Color::Red))
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };

    let status_widget = Paragraph::new(Line::from(vec![
        Span::raw("Status: "),
        Span::raw(status),
        Span::raw(" "),
        badge,
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(status_widget, rows[1]);
}
