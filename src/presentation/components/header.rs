use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;

use super::super::view::UiContext;

pub fn render_header(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let roster = ctx.roster;
    let mut counts = format!(
        "{} row(s) • next slot {}",
        roster.visible_len(),
        roster.total_forms()
    );
    let pending = roster.pending_deletions();
    if pending > 0 {
        counts.push_str(&format!(" • {pending} pending deletion(s)"));
    }

    let mut lines = vec![Line::from(vec![
        Span::styled(
            ctx.title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(counts, Style::default().fg(Color::DarkGray)),
    ])];
    if let Some(description) = ctx.description {
        let width = area.width.saturating_sub(4).max(16) as usize;
        if let Some(first) = wrap(description, width).into_iter().next() {
            lines.push(Line::from(Span::styled(
                first.into_owned(),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(widget, area);
}
