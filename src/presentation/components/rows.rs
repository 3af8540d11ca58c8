use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::form::{FocusColumn, RowState};

use super::super::view::UiContext;

const ADDRESS_PLACEHOLDER: &str = "Email Address";

pub fn render_rows(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let roster = ctx.roster;
    if roster.visible_len() == 0 {
        let placeholder = Paragraph::new("No rows. Press Ctrl+N to add one.").block(
            Block::default()
                .title("Recipients")
                .borders(Borders::ALL),
        );
        frame.render_widget(placeholder, area);
        return;
    }

    let selected = roster.selected_visible_position();
    let focus = roster.focus();
    let content_width = area.width.saturating_sub(4) as usize;

    let items = roster
        .visible_rows()
        .enumerate()
        .map(|(position, row)| {
            let is_selected = selected == Some(position);
            build_row_item(row, is_selected, focus, content_width)
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Recipients")
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    list_state.select(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn build_row_item(
    row: &RowState,
    is_selected: bool,
    focus: FocusColumn,
    content_width: usize,
) -> ListItem<'static> {
    let marker = if is_selected { "› " } else { "  " };
    let address_focused = is_selected && focus == FocusColumn::Address;
    let tags_focused = is_selected && focus == FocusColumn::Tags;

    let mut address = row.address.text().to_string();
    let address_style = if address.is_empty() {
        address = ADDRESS_PLACEHOLDER.to_string();
        Style::default().fg(Color::DarkGray)
    } else if address_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    if address_focused {
        address.push('▏');
    }
    truncate_to_width(&mut address, content_width.saturating_sub(12));

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(
            format!("#{:<3}", row.index),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(address, address_style),
        Span::raw("  "),
        Span::styled(
            row.tags.summary(),
            if tags_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
    ];
    if !row.is_persisted() {
        spans.push(Span::styled(
            "  new",
            Style::default().fg(Color::Green),
        ));
    }

    let mut lines = vec![Line::from(spans)];
    if tags_focused {
        lines.push(tag_strip(row));
    }
    ListItem::new(lines)
}

/// Option strip shown under the selected row while its tags are focused.
fn tag_strip(row: &RowState) -> Line<'static> {
    let mut spans = vec![Span::raw("      ")];
    for (idx, tag) in row.tags.vocabulary().options().iter().enumerate() {
        let checked = row.tags.selected_flags()[idx];
        let box_mark = if checked { "[x] " } else { "[ ] " };
        let style = if idx == row.tags.highlight() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else if checked {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{box_mark}{} ", tag.label()), style));
    }
    Line::from(spans)
}

fn truncate_to_width(text: &mut String, max_width: usize) {
    if max_width == 0 {
        return;
    }
    while text.width() > max_width {
        text.pop();
    }
}
