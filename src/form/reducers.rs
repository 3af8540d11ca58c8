use super::{actions::RosterCommand, roster::RosterState};

/// Outcome of a roster command, for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    RowAdded(usize),
    RowRemoved,
    SelectionMoved,
    FocusMoved,
    Nothing,
}

pub fn apply_command(state: &mut RosterState, command: RosterCommand) -> CommandEffect {
    match command {
        RosterCommand::AddRow => CommandEffect::RowAdded(state.add_row()),
        RosterCommand::RemoveRow => {
            if state.remove_selected() {
                CommandEffect::RowRemoved
            } else {
                CommandEffect::Nothing
            }
        }
        RosterCommand::SelectRow(delta) => {
            if state.select_row(delta) {
                CommandEffect::SelectionMoved
            } else {
                CommandEffect::Nothing
            }
        }
        RosterCommand::FocusNextColumn => {
            state.focus_next_column();
            CommandEffect::FocusMoved
        }
        RosterCommand::FocusPrevColumn => {
            state.focus_prev_column();
            CommandEffect::FocusMoved
        }
    }
}
