#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod presentation;
mod submit;

#[cfg(test)]
mod tests;

pub use app::{RosterOutcome, RosterUI, UiOptions};
pub use domain::{
    AddressFieldName, FieldNaming, ProductTag, RemovePolicy, RosterProfile, TagVocabulary,
};
pub use form::{
    AddressField, CommandEffect, FocusColumn, RosterCommand, RosterState, RowSeed, RowState,
    TagSelector, apply_command,
};
pub use submit::{
    BindError, bind_pairs, parse_urlencoded_body, roster_json, seed_json, submission_pairs,
    urlencoded_body,
};

pub mod prelude {
    pub use super::{RosterProfile, RosterState, RosterUI, RowSeed, UiOptions};
}
