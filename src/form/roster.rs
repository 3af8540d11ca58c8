use std::collections::HashSet;

use crossterm::event::KeyEvent;
use log::debug;

use crate::domain::{ProductTag, RemovePolicy, RosterProfile};

use super::row::RowState;

/// Which editor within the selected row receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusColumn {
    #[default]
    Address,
    Tags,
}

/// Seed data for a row that already exists server-side (or was carried over
/// from a previous submission).
#[derive(Debug, Clone)]
pub struct RowSeed {
    pub address: String,
    pub tags: Vec<ProductTag>,
    pub persisted_id: Option<i64>,
    pub deleted: bool,
}

impl RowSeed {
    pub fn new(address: impl Into<String>, tags: Vec<ProductTag>) -> Self {
        Self {
            address: address.into(),
            tags,
            persisted_id: None,
            deleted: false,
        }
    }

    pub fn with_persisted_id(mut self, id: i64) -> Self {
        self.persisted_id = Some(id);
        self
    }
}

/// The row list editor: an ordered list of rows plus the index counter the
/// submission convention requires. The counter equals the number of rows
/// ever added (seeded included) and never decreases.
#[derive(Debug, Clone)]
pub struct RosterState {
    profile: RosterProfile,
    rows: Vec<RowState>,
    next_index: usize,
    initial_forms: usize,
    selected: usize,
    focus: FocusColumn,
    dirty: bool,
}

impl RosterState {
    pub fn new(profile: RosterProfile) -> Self {
        Self {
            profile,
            rows: Vec::new(),
            next_index: 0,
            initial_forms: 0,
            selected: 0,
            focus: FocusColumn::default(),
            dirty: false,
        }
    }

    /// Ingest pre-existing rows. Replaces the current contents; the counter
    /// restarts at the seeded count, matching a freshly rendered page.
    pub fn seed_rows(&mut self, seeds: Vec<RowSeed>) {
        self.rows = seeds
            .into_iter()
            .enumerate()
            .map(|(index, seed)| {
                let mut row = RowState::seeded(
                    index,
                    self.profile.vocabulary.clone(),
                    seed.address,
                    &seed.tags,
                    seed.persisted_id,
                );
                if seed.deleted {
                    row.mark_deleted();
                }
                row
            })
            .collect();
        self.next_index = self.rows.len();
        self.initial_forms = self.rows.len();
        self.selected = 0;
        self.focus = FocusColumn::default();
        self.dirty = false;
        self.normalize_selection();
    }

    /// Reassemble a roster from bound submission data. Row indices and the
    /// counter come from the wire, not from list positions.
    pub(crate) fn from_bound_rows(
        profile: RosterProfile,
        rows: Vec<RowState>,
        total_forms: usize,
        initial_forms: usize,
    ) -> Self {
        let mut state = Self {
            profile,
            rows,
            next_index: total_forms,
            initial_forms,
            selected: 0,
            focus: FocusColumn::default(),
            dirty: false,
        };
        state.normalize_selection();
        state
    }

    pub fn profile(&self) -> &RosterProfile {
        &self.profile
    }

    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &RowState> {
        self.rows.iter().filter(|row| !row.hidden)
    }

    pub fn visible_len(&self) -> usize {
        self.visible_rows().count()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the management counter field: the next unused row index.
    pub fn total_forms(&self) -> usize {
        self.next_index
    }

    pub fn initial_forms(&self) -> usize {
        self.initial_forms
    }

    pub fn pending_deletions(&self) -> usize {
        self.rows.iter().filter(|row| row.deleted).count()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn focus(&self) -> FocusColumn {
        self.focus
    }

    pub fn selected_row(&self) -> Option<&RowState> {
        self.rows.get(self.selected).filter(|row| !row.hidden)
    }

    pub fn selected_row_mut(&mut self) -> Option<&mut RowState> {
        self.rows.get_mut(self.selected).filter(|row| !row.hidden)
    }

    /// Position of the selected row among the visible rows, for rendering.
    pub fn selected_visible_position(&self) -> Option<usize> {
        let selected = self.selected;
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.hidden)
            .position(|(pos, _)| pos == selected)
    }

    /// Append a blank row carrying the current counter value, then advance
    /// the counter by exactly one. The new row becomes the selection.
    pub fn add_row(&mut self) -> usize {
        let index = self.next_index;
        self.rows
            .push(RowState::blank(index, self.profile.vocabulary.clone()));
        self.next_index += 1;
        self.selected = self.rows.len() - 1;
        self.focus = FocusColumn::Address;
        self.dirty = true;
        debug!("added row {index}, counter now {}", self.next_index);
        index
    }

    /// Remove the selected row under the profile's policy. Returns false
    /// when there is nothing visible to remove.
    pub fn remove_selected(&mut self) -> bool {
        let Some(position) = self
            .rows
            .get(self.selected)
            .filter(|row| !row.hidden)
            .map(|_| self.selected)
        else {
            return false;
        };
        self.remove_at(position)
    }

    /// Remove the row carrying `index` (the assigned counter value, not the
    /// list position). A missing or already-hidden row is a no-op.
    pub fn remove_row(&mut self, index: usize) -> bool {
        let Some(position) = self.rows.iter().position(|row| row.index == index) else {
            return false;
        };
        self.remove_at(position)
    }

    fn remove_at(&mut self, position: usize) -> bool {
        match self.profile.remove_policy {
            RemovePolicy::Detach => {
                let row = self.rows.remove(position);
                debug!("detached row {}", row.index);
            }
            RemovePolicy::MarkDeleted => {
                let row = &mut self.rows[position];
                if row.hidden {
                    return false;
                }
                row.mark_deleted();
                debug!("marked row {} for deletion", row.index);
            }
        }
        self.dirty = true;
        self.normalize_selection();
        true
    }

    /// Move the selection over visible rows. Hidden rows are skipped.
    pub fn select_row(&mut self, delta: i32) -> bool {
        let visible: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter_map(|(pos, row)| (!row.hidden).then_some(pos))
            .collect();
        if visible.is_empty() {
            return false;
        }
        let current = visible
            .iter()
            .position(|pos| *pos == self.selected)
            .unwrap_or(0);
        let len = visible.len() as i32;
        let next = (current as i32 + delta).clamp(0, len - 1) as usize;
        let changed = visible[next] != self.selected;
        self.selected = visible[next];
        changed
    }

    pub fn focus_next_column(&mut self) {
        self.focus = match self.focus {
            FocusColumn::Address => FocusColumn::Tags,
            FocusColumn::Tags => {
                self.select_row(1);
                FocusColumn::Address
            }
        };
    }

    pub fn focus_prev_column(&mut self) {
        self.focus = match self.focus {
            FocusColumn::Tags => FocusColumn::Address,
            FocusColumn::Address => {
                self.select_row(-1);
                FocusColumn::Tags
            }
        };
    }

    /// Route a keystroke to the focused editor of the selected row.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let focus = self.focus;
        let Some(row) = self.selected_row_mut() else {
            return false;
        };
        let changed = match focus {
            FocusColumn::Address => row.address.handle_key(key),
            FocusColumn::Tags => row.tags.handle_key(key),
        };
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// First address that appears on more than one live row, if any. The
    /// backend enforces uniqueness per group; the editor only warns.
    pub fn duplicate_address(&self) -> Option<String> {
        let mut seen = HashSet::new();
        for row in self.rows.iter().filter(|row| !row.deleted) {
            let address = row.address.text().trim().to_ascii_lowercase();
            if address.is_empty() {
                continue;
            }
            if !seen.insert(address) {
                return Some(row.address.text().trim().to_string());
            }
        }
        None
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn normalize_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
            return;
        }
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
        if self.rows[self.selected].hidden {
            // Prefer the nearest visible row after the selection, then before.
            let after = self.rows[self.selected..]
                .iter()
                .position(|row| !row.hidden)
                .map(|offset| self.selected + offset);
            let before = self.rows[..self.selected]
                .iter()
                .rposition(|row| !row.hidden);
            if let Some(pos) = after.or(before) {
                self.selected = pos;
            }
        }
    }
}
