use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::{FocusColumn, RosterCommand};

/// App-level result of routing a keystroke.
#[derive(Debug, Clone, Copy)]
pub enum AppCommand {
    Accept,
    Quit,
    Roster(RosterCommand),
    /// Not a binding; hand the key to the focused editor.
    Edit,
}

pub fn route_key(key: &KeyEvent) -> AppCommand {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') if ctrl => AppCommand::Accept,
        KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => AppCommand::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') if ctrl => {
            AppCommand::Roster(RosterCommand::AddRow)
        }
        KeyCode::Char('d') | KeyCode::Char('D') if ctrl => {
            AppCommand::Roster(RosterCommand::RemoveRow)
        }
        KeyCode::Up => AppCommand::Roster(RosterCommand::SelectRow(-1)),
        KeyCode::Down => AppCommand::Roster(RosterCommand::SelectRow(1)),
        KeyCode::Tab => AppCommand::Roster(RosterCommand::FocusNextColumn),
        KeyCode::BackTab => AppCommand::Roster(RosterCommand::FocusPrevColumn),
        _ => AppCommand::Edit,
    }
}

pub fn help_text(focus: FocusColumn) -> &'static str {
    match focus {
        FocusColumn::Address => {
            "Type to edit address • Tab tags • ↑/↓ rows • Ctrl+N add • Ctrl+D remove • Ctrl+S accept • Ctrl+Q quit"
        }
        FocusColumn::Tags => {
            "←/→ pick tag • Space toggle • Tab next row • Ctrl+N add • Ctrl+D remove • Ctrl+S accept • Ctrl+Q quit"
        }
    }
}
