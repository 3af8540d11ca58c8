use crate::{
    domain::{ProductTag, RosterProfile},
    form::{RosterState, RowSeed},
};

fn hard_roster() -> RosterState {
    RosterState::new(RosterProfile::hard_delete())
}

fn soft_roster() -> RosterState {
    RosterState::new(RosterProfile::soft_delete())
}

fn visible_indices(roster: &RosterState) -> Vec<usize> {
    roster.visible_rows().map(|row| row.index).collect()
}

#[test]
fn first_add_on_empty_roster_gets_index_zero() {
    let mut roster = hard_roster();
    assert_eq!(roster.total_forms(), 0);
    let index = roster.add_row();
    assert_eq!(index, 0);
    assert_eq!(roster.row_count(), 1);
    assert_eq!(roster.total_forms(), 1);
}

#[test]
fn consecutive_adds_assign_distinct_sequential_indices() {
    let mut roster = hard_roster();
    for _ in 0..5 {
        roster.add_row();
    }
    assert_eq!(visible_indices(&roster), vec![0, 1, 2, 3, 4]);
    assert_eq!(roster.total_forms(), 5);
}

#[test]
fn counter_never_decreases_under_interleaved_ops() {
    let mut roster = hard_roster();
    let mut watermark = roster.total_forms();
    let script = [true, true, false, true, false, false, true];
    for add in script {
        if add {
            roster.add_row();
        } else {
            roster.remove_selected();
        }
        assert!(roster.total_forms() >= watermark);
        watermark = roster.total_forms();
    }
}

#[test]
fn hard_removal_of_first_row_leaves_permanent_gap() {
    let mut roster = hard_roster();
    roster.add_row();
    roster.add_row();
    assert!(roster.remove_row(0));
    roster.add_row();
    assert_eq!(roster.visible_len(), 2);
    assert_eq!(visible_indices(&roster), vec![1, 2]);
    assert_eq!(roster.total_forms(), 3);
}

#[test]
fn hard_removal_never_reuses_a_removed_index() {
    let mut roster = hard_roster();
    roster.add_row();
    roster.add_row();
    assert!(roster.remove_row(1));
    roster.add_row();
    assert_eq!(roster.visible_len(), 2);
    assert_eq!(visible_indices(&roster), vec![0, 2]);
    assert_eq!(roster.total_forms(), 3);
}

#[test]
fn soft_removal_preserves_values_and_keeps_the_row() {
    let mut roster = soft_roster();
    roster.seed_rows(vec![
        RowSeed::new("keep@example.com", vec![ProductTag::Tubing]).with_persisted_id(7),
        RowSeed::new("drop@example.com", vec![ProductTag::Casing, ProductTag::Any])
            .with_persisted_id(42),
    ]);
    let before = roster.row_count();
    assert!(roster.remove_row(1));

    assert_eq!(roster.row_count(), before);
    assert_eq!(roster.visible_len(), 1);
    assert_eq!(roster.total_forms(), 2);

    let row = &roster.rows()[1];
    assert!(row.deleted);
    assert!(row.hidden);
    assert_eq!(row.address.text(), "drop@example.com");
    assert_eq!(
        row.tags.selected_tags(),
        vec![ProductTag::Any, ProductTag::Casing]
    );
    assert_eq!(row.persisted_id, Some(42));
}

#[test]
fn soft_removal_is_idempotent_on_a_hidden_row() {
    let mut roster = soft_roster();
    roster.seed_rows(vec![
        RowSeed::new("a@example.com", vec![]).with_persisted_id(1),
    ]);
    assert!(roster.remove_row(0));
    assert!(!roster.remove_row(0));
    let row = &roster.rows()[0];
    assert!(row.deleted);
    assert!(row.hidden);
    assert_eq!(roster.pending_deletions(), 1);
}

#[test]
fn soft_removal_flags_never_persisted_rows_too() {
    let mut roster = soft_roster();
    roster.add_row();
    assert!(roster.remove_selected());
    let row = &roster.rows()[0];
    assert!(row.deleted);
    assert!(!row.is_persisted());
}

#[test]
fn counter_starts_at_the_seeded_row_count() {
    let mut roster = soft_roster();
    roster.seed_rows(vec![
        RowSeed::new("a@example.com", vec![]).with_persisted_id(1),
        RowSeed::new("b@example.com", vec![]).with_persisted_id(2),
    ]);
    assert_eq!(roster.total_forms(), 2);
    assert_eq!(roster.initial_forms(), 2);
    assert_eq!(roster.add_row(), 2);
    assert_eq!(roster.total_forms(), 3);
}

#[test]
fn removing_a_missing_row_is_a_noop() {
    let mut roster = hard_roster();
    roster.add_row();
    assert!(!roster.remove_row(9));
    assert_eq!(roster.row_count(), 1);
    assert_eq!(roster.total_forms(), 1);

    let mut empty = hard_roster();
    assert!(!empty.remove_selected());
}

#[test]
fn selection_lands_on_the_nearest_visible_row_after_removal() {
    let mut roster = hard_roster();
    roster.add_row();
    roster.add_row();
    roster.add_row();
    // Selection follows the latest add; removing it falls back to a neighbour.
    assert!(roster.remove_selected());
    assert_eq!(roster.selected_row().map(|row| row.index), Some(1));

    let mut soft = soft_roster();
    soft.add_row();
    soft.add_row();
    assert!(soft.remove_selected());
    assert_eq!(soft.selected_row().map(|row| row.index), Some(0));
}

#[test]
fn duplicate_address_is_reported_case_insensitively() {
    let mut roster = soft_roster();
    roster.seed_rows(vec![
        RowSeed::new("ops@example.com", vec![]),
        RowSeed::new("OPS@example.com", vec![]),
    ]);
    assert_eq!(roster.duplicate_address().as_deref(), Some("OPS@example.com"));

    // A soft-deleted row no longer counts toward duplication.
    roster.remove_row(1);
    assert_eq!(roster.duplicate_address(), None);
}

#[test]
fn seeding_resets_dirty_and_adding_sets_it() {
    let mut roster = soft_roster();
    roster.seed_rows(vec![RowSeed::new("a@example.com", vec![])]);
    assert!(!roster.is_dirty());
    roster.add_row();
    assert!(roster.is_dirty());
    roster.mark_clean();
    assert!(!roster.is_dirty());
}
