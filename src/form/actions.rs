#[derive(Debug, Clone, Copy)]
pub enum RosterCommand {
    AddRow,
    RemoveRow,
    SelectRow(i32),
    FocusNextColumn,
    FocusPrevColumn,
}
