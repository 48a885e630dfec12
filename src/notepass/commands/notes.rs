use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::NoteStore;
use tracing::debug;

/// Adds a note. Blank text is ignored rather than stored.
pub fn add(store: &mut NoteStore, content: &str, show_listing: bool) -> CmdResult {
    if content.trim().is_empty() {
        debug!("blank note ignored");
        return CmdResult::default().with_message(CmdMessage::warning("Empty note ignored."));
    }

    store.add_note(content);
    let result = CmdResult::default().with_message(CmdMessage::success("Note added successfully!"));
    if show_listing {
        result.with_listing(store.format_notes())
    } else {
        result
    }
}

pub fn list(store: &NoteStore) -> CmdResult {
    CmdResult::default().with_listing(store.format_notes())
}

/// Deletes the note whose id the user typed as `raw_id`.
///
/// Non-numeric input is an error; an unknown id is reported as a message.
pub fn delete(store: &mut NoteStore, raw_id: &str, show_listing: bool) -> Result<CmdResult> {
    let id: NoteId = raw_id.parse()?;

    if !store.delete_note(id) {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::error(format!("Note with ID {} not found.", id))));
    }

    let result = CmdResult::default().with_message(CmdMessage::success("Note deleted successfully."));
    Ok(if show_listing {
        result.with_listing(store.format_notes())
    } else {
        result
    })
}
