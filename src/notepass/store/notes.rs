use crate::model::{Note, NoteId};
use std::collections::BTreeMap;
use tracing::debug;

/// Shown by [`NoteStore::format_notes`] when there is nothing to list.
pub const NO_NOTES: &str = "No notes found.";

/// Notes keyed by id. Listing order is ascending id, which is also the order
/// the notes were added in.
#[derive(Debug)]
pub struct NoteStore {
    notes: BTreeMap<NoteId, Note>,
    next_id: NoteId,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            next_id: NoteId::FIRST,
        }
    }

    /// Stores `content` under the next id and returns that id.
    /// Content is taken as-is; blank notes are filtered by callers.
    pub fn add_note(&mut self, content: impl Into<String>) -> NoteId {
        let id = self.next_id;
        self.next_id = id.next();
        self.notes.insert(id, Note::new(id, content.into()));
        debug!(%id, "note added");
        id
    }

    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn list_notes(&self) -> Vec<&Note> {
        self.notes.values().collect()
    }

    /// One `ID: {id} | Note: {content}` line per note, or [`NO_NOTES`].
    pub fn format_notes(&self) -> String {
        if self.notes.is_empty() {
            return NO_NOTES.to_string();
        }
        self.notes
            .values()
            .map(Note::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns whether a note with `id` was present.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let removed = self.notes.remove(&id).is_some();
        debug!(%id, removed, "note delete");
        removed
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
