pub(crate) mod keymap;
mod controller;
mod options;
mod status;
mod terminal;

pub use controller::{RosterOutcome, RosterUI};
pub use options::UiOptions;
pub use status::StatusLine;
