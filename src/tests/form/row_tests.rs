use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    domain::{ProductTag, TagVocabulary},
    form::{AddressField, TagSelector},
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

#[test]
fn address_field_appends_and_deletes_characters() {
    let mut address = AddressField::default();
    for ch in "ab@c".chars() {
        assert!(address.handle_key(&key(KeyCode::Char(ch))));
    }
    assert_eq!(address.text(), "ab@c");

    assert!(address.handle_key(&key(KeyCode::Backspace)));
    assert_eq!(address.text(), "ab@");

    assert!(address.handle_key(&key(KeyCode::Delete)));
    assert_eq!(address.text(), "");
    assert!(address.is_blank());
}

#[test]
fn address_field_ignores_control_chords_and_navigation() {
    let mut address = AddressField::new("ops@example.com");
    assert!(!address.handle_key(&ctrl('n')));
    assert!(!address.handle_key(&key(KeyCode::Up)));
    assert_eq!(address.text(), "ops@example.com");
}

#[test]
fn tag_selector_toggles_the_highlighted_option() {
    let mut tags = TagSelector::new(TagVocabulary::standard());
    assert!(tags.toggle_highlighted());
    assert_eq!(tags.selected_tags(), vec![ProductTag::PolyPipe]);

    assert!(tags.move_highlight(2));
    assert!(tags.toggle_highlighted());
    assert_eq!(
        tags.selected_tags(),
        vec![ProductTag::PolyPipe, ProductTag::CompositePipe]
    );

    // Toggling again clears the flag.
    assert!(tags.toggle_highlighted());
    assert_eq!(tags.selected_tags(), vec![ProductTag::PolyPipe]);
}

#[test]
fn tag_highlight_clamps_at_the_vocabulary_edges() {
    let mut tags = TagSelector::new(TagVocabulary::standard());
    assert!(!tags.move_highlight(-1));
    assert_eq!(tags.highlight(), 0);
    assert!(tags.move_highlight(100));
    assert_eq!(tags.highlight(), tags.vocabulary().len() - 1);
}

#[test]
fn selected_tags_follow_vocabulary_order_not_toggle_order() {
    let mut tags = TagSelector::new(TagVocabulary::with_any());
    tags.set_selected(ProductTag::Other, true);
    tags.set_selected(ProductTag::Any, true);
    tags.set_selected(ProductTag::Tubing, true);
    assert_eq!(
        tags.selected_tags(),
        vec![ProductTag::Any, ProductTag::Tubing, ProductTag::Other]
    );
}

#[test]
fn out_of_vocabulary_tags_are_rejected() {
    let mut tags = TagSelector::new(TagVocabulary::standard());
    assert!(!tags.set_selected(ProductTag::Any, true));
    assert!(!tags.is_selected(ProductTag::Any));
}

#[test]
fn summary_uses_human_labels() {
    let tags = TagSelector::from_tags(
        TagVocabulary::standard(),
        &[ProductTag::TubingSandScreens, ProductTag::FlexPipe],
    );
    assert_eq!(tags.summary(), "[Flexpipe, Tubing - Sand Screens]");

    let empty = TagSelector::new(TagVocabulary::standard());
    assert_eq!(empty.summary(), "[]");
}

#[test]
fn space_toggles_through_the_key_handler() {
    let mut tags = TagSelector::new(TagVocabulary::standard());
    assert!(tags.handle_key(&key(KeyCode::Right)));
    assert!(tags.handle_key(&key(KeyCode::Char(' '))));
    assert_eq!(tags.selected_tags(), vec![ProductTag::LinePipe]);
}
