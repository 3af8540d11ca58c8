use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::keymap::{AppCommand, route_key},
    domain::RosterProfile,
    form::{CommandEffect, FocusColumn, RosterCommand, RosterState, apply_command},
};

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn control_chords_map_to_roster_operations() {
    assert!(matches!(
        route_key(&ctrl('n')),
        AppCommand::Roster(RosterCommand::AddRow)
    ));
    assert!(matches!(
        route_key(&ctrl('d')),
        AppCommand::Roster(RosterCommand::RemoveRow)
    ));
    assert!(matches!(route_key(&ctrl('s')), AppCommand::Accept));
    assert!(matches!(route_key(&ctrl('q')), AppCommand::Quit));
}

#[test]
fn bare_characters_fall_through_to_editing() {
    assert!(matches!(
        route_key(&plain(KeyCode::Char('n'))),
        AppCommand::Edit
    ));
    assert!(matches!(
        route_key(&plain(KeyCode::Char(' '))),
        AppCommand::Edit
    ));
}

#[test]
fn arrows_and_tab_drive_navigation() {
    assert!(matches!(
        route_key(&plain(KeyCode::Up)),
        AppCommand::Roster(RosterCommand::SelectRow(-1))
    ));
    assert!(matches!(
        route_key(&plain(KeyCode::Down)),
        AppCommand::Roster(RosterCommand::SelectRow(1))
    ));
    assert!(matches!(
        route_key(&plain(KeyCode::Tab)),
        AppCommand::Roster(RosterCommand::FocusNextColumn)
    ));
    assert!(matches!(
        route_key(&plain(KeyCode::BackTab)),
        AppCommand::Roster(RosterCommand::FocusPrevColumn)
    ));
}

#[test]
fn reducer_reports_what_each_command_did() {
    let mut roster = RosterState::new(RosterProfile::hard_delete());
    assert_eq!(
        apply_command(&mut roster, RosterCommand::AddRow),
        CommandEffect::RowAdded(0)
    );
    assert_eq!(
        apply_command(&mut roster, RosterCommand::RemoveRow),
        CommandEffect::RowRemoved
    );
    assert_eq!(
        apply_command(&mut roster, RosterCommand::RemoveRow),
        CommandEffect::Nothing
    );
    assert_eq!(
        apply_command(&mut roster, RosterCommand::SelectRow(1)),
        CommandEffect::Nothing
    );
}

#[test]
fn focus_cycles_between_address_and_tags() {
    let mut roster = RosterState::new(RosterProfile::hard_delete());
    roster.add_row();
    assert_eq!(roster.focus(), FocusColumn::Address);
    apply_command(&mut roster, RosterCommand::FocusNextColumn);
    assert_eq!(roster.focus(), FocusColumn::Tags);
    apply_command(&mut roster, RosterCommand::FocusNextColumn);
    assert_eq!(roster.focus(), FocusColumn::Address);
}
