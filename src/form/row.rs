use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{ProductTag, TagVocabulary};

/// Editable address text buffer, in the same shape as any other text input:
/// characters append, Backspace pops, Delete clears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressField {
    buffer: String,
}

impl AddressField {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            buffer: initial.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.buffer.push(ch);
                true
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                true
            }
            KeyCode::Delete => {
                self.buffer.clear();
                true
            }
            _ => false,
        }
    }
}

/// Multi-select over the roster's tag vocabulary: one flag per option plus a
/// highlight for keyboard toggling.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSelector {
    vocabulary: TagVocabulary,
    selected: Vec<bool>,
    highlight: usize,
}

impl TagSelector {
    pub fn new(vocabulary: TagVocabulary) -> Self {
        let selected = vec![false; vocabulary.len()];
        Self {
            vocabulary,
            selected,
            highlight: 0,
        }
    }

    pub fn from_tags(vocabulary: TagVocabulary, tags: &[ProductTag]) -> Self {
        let mut selector = Self::new(vocabulary);
        for tag in tags {
            if let Some(idx) = selector.vocabulary.position(*tag) {
                selector.selected[idx] = true;
            }
        }
        selector
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn move_highlight(&mut self, delta: i32) -> bool {
        if self.vocabulary.is_empty() {
            return false;
        }
        let len = self.vocabulary.len() as i32;
        let next = (self.highlight as i32 + delta).clamp(0, len - 1);
        let changed = next as usize != self.highlight;
        self.highlight = next as usize;
        changed
    }

    pub fn toggle_highlighted(&mut self) -> bool {
        if self.vocabulary.is_empty() {
            return false;
        }
        let idx = self.highlight.min(self.selected.len() - 1);
        self.selected[idx] = !self.selected[idx];
        true
    }

    pub fn set_selected(&mut self, tag: ProductTag, on: bool) -> bool {
        match self.vocabulary.position(tag) {
            Some(idx) => {
                self.selected[idx] = on;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, tag: ProductTag) -> bool {
        self.vocabulary
            .position(tag)
            .map(|idx| self.selected[idx])
            .unwrap_or(false)
    }

    /// Selected tags in vocabulary order.
    pub fn selected_tags(&self) -> Vec<ProductTag> {
        self.vocabulary
            .options()
            .iter()
            .zip(self.selected.iter())
            .filter_map(|(tag, flag)| flag.then_some(*tag))
            .collect()
    }

    pub fn selected_flags(&self) -> &[bool] {
        &self.selected
    }

    pub fn summary(&self) -> String {
        let labels = self
            .selected_tags()
            .into_iter()
            .map(ProductTag::label)
            .collect::<Vec<_>>();
        if labels.is_empty() {
            "[]".to_string()
        } else {
            format!("[{}]", labels.join(", "))
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.move_highlight(-1),
            KeyCode::Right => self.move_highlight(1),
            KeyCode::Char(' ') => self.toggle_highlighted(),
            _ => false,
        }
    }
}

/// One roster row. The index is assigned at creation and never changes, even
/// when earlier rows are removed.
#[derive(Debug, Clone, PartialEq)]
pub struct RowState {
    pub index: usize,
    pub address: AddressField,
    pub tags: TagSelector,
    pub persisted_id: Option<i64>,
    pub deleted: bool,
    pub hidden: bool,
}

impl RowState {
    pub fn blank(index: usize, vocabulary: TagVocabulary) -> Self {
        Self {
            index,
            address: AddressField::default(),
            tags: TagSelector::new(vocabulary),
            persisted_id: None,
            deleted: false,
            hidden: false,
        }
    }

    pub fn seeded(
        index: usize,
        vocabulary: TagVocabulary,
        address: impl Into<String>,
        tags: &[ProductTag],
        persisted_id: Option<i64>,
    ) -> Self {
        Self {
            index,
            address: AddressField::new(address),
            tags: TagSelector::from_tags(vocabulary, tags),
            persisted_id,
            deleted: false,
            hidden: false,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted_id.is_some()
    }

    /// Flag the row for downstream deletion and take it out of the display.
    /// Field values are left untouched; calling this twice is harmless.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.hidden = true;
    }
}
