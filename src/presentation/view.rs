use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::form::RosterState;

use super::components::{render_footer, render_header, render_rows};

pub struct UiContext<'a> {
    pub roster: &'a RosterState,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub warning: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let header_height = if ctx.description.is_some() { 4 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &ctx);
    render_rows(frame, chunks[1], &ctx);
    render_footer(frame, chunks[2], &ctx);
}
