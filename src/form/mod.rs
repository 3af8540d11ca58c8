mod actions;
mod reducers;
mod roster;
mod row;

pub use actions::RosterCommand;
pub use reducers::{CommandEffect, apply_command};
pub use roster::{FocusColumn, RosterState, RowSeed};
pub use row::{AddressField, RowState, TagSelector};
