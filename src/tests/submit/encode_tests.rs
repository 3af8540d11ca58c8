use crate::{
    domain::{ProductTag, RosterProfile},
    form::{RosterState, RowSeed},
    submit::{roster_json, submission_pairs, urlencoded_body},
};

fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

fn seeded_soft_roster() -> RosterState {
    let mut roster = RosterState::new(RosterProfile::soft_delete());
    roster.seed_rows(vec![
        RowSeed::new("ops@example.com", vec![ProductTag::LinePipe]).with_persisted_id(7),
    ]);
    roster
}

#[test]
fn management_pair_leads_the_submission() {
    let mut roster = seeded_soft_roster();
    roster.add_row();
    let pairs = submission_pairs(&roster);
    assert_eq!(pairs[0], pair("form-TOTAL_FORMS", "2"));
    assert_eq!(pairs[1], pair("form-INITIAL_FORMS", "1"));
}

#[test]
fn rows_encode_address_tags_and_identity() {
    let mut roster = seeded_soft_roster();
    roster.add_row();
    {
        let row = roster.selected_row_mut().unwrap();
        row.address.set_text("new@example.com");
        row.tags.set_selected(ProductTag::Any, true);
        row.tags.set_selected(ProductTag::Casing, true);
    }

    let pairs = submission_pairs(&roster);
    assert_eq!(
        &pairs[2..],
        &[
            pair("form-0-address", "ops@example.com"),
            pair("form-0-tags", "line_pipe"),
            pair("form-0-id", "7"),
            pair("form-1-address", "new@example.com"),
            pair("form-1-tags", "any"),
            pair("form-1-tags", "casing"),
            pair("form-1-id", ""),
        ]
    );
}

#[test]
fn delete_flag_is_only_emitted_when_checked() {
    let mut roster = seeded_soft_roster();
    let before = submission_pairs(&roster);
    assert!(!before.iter().any(|(key, _)| key == "form-0-DELETE"));

    roster.remove_row(0);
    let after = submission_pairs(&roster);
    assert!(after.contains(&pair("form-0-DELETE", "on")));
    // The hidden row's values still travel with the deletion request.
    assert!(after.contains(&pair("form-0-address", "ops@example.com")));
    assert!(after.contains(&pair("form-0-id", "7")));
}

#[test]
fn hard_profile_drops_detached_rows_but_not_their_indices() {
    let mut roster = RosterState::new(RosterProfile::hard_delete());
    roster.add_row();
    roster.selected_row_mut().unwrap().address.set_text("a@x.io");
    roster.add_row();
    roster.selected_row_mut().unwrap().address.set_text("b@x.io");
    roster.remove_row(0);

    let pairs = submission_pairs(&roster);
    assert_eq!(pairs[0], pair("form-TOTAL_FORMS", "2"));
    assert!(pairs.contains(&pair("form-1-email", "b@x.io")));
    assert!(!pairs.iter().any(|(key, _)| key.starts_with("form-0-")));
}

#[test]
fn plain_naming_has_no_management_pair_and_joins_tags() {
    let mut roster = RosterState::new(RosterProfile::plain_list());
    roster.add_row();
    {
        let row = roster.selected_row_mut().unwrap();
        row.address.set_text("yard@example.com");
        row.tags.set_selected(ProductTag::PolyPipe, true);
        row.tags.set_selected(ProductTag::Other, true);
    }

    let pairs = submission_pairs(&roster);
    assert_eq!(
        pairs,
        vec![
            pair("email_list", "yard@example.com"),
            pair("tag_list", "poly_pipe,other"),
        ]
    );
}

#[test]
fn urlencoded_body_escapes_reserved_characters() {
    let mut roster = RosterState::new(RosterProfile::hard_delete());
    roster.add_row();
    roster
        .selected_row_mut()
        .unwrap()
        .address
        .set_text("field ops@example.com");
    let body = urlencoded_body(&roster);
    assert!(body.contains("form-0-email=field%20ops%40example.com"));
    assert!(body.contains("form-TOTAL_FORMS=1"));
}

#[test]
fn json_projection_mirrors_the_roster() {
    let mut roster = seeded_soft_roster();
    roster.remove_row(0);
    let value = roster_json(&roster);
    assert_eq!(value["total_forms"], 1);
    assert_eq!(value["initial_forms"], 1);
    assert_eq!(value["rows"][0]["address"], "ops@example.com");
    assert_eq!(value["rows"][0]["tags"][0], "line_pipe");
    assert_eq!(value["rows"][0]["id"], 7);
    assert_eq!(value["rows"][0]["deleted"], true);
}
