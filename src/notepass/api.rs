//! # API Facade
//!
//! [`NotepassApi`] is the single entry point a front end talks to. It owns the
//! session's two stores and dispatches each call to the matching command.
//!
//! The stores are handed in by whoever builds the session, so a test can
//! start from a pre-filled store and a front end can run several independent
//! sessions in one process. There is no global state.
//!
//! The facade does no I/O and no formatting beyond what the commands put in
//! [`CmdResult`]. Printing is left to the caller.

use crate::commands;
use crate::error::Result;
use crate::store::{NoteStore, PasswordStore};
use std::path::Path;

pub struct NotepassApi {
    notes: NoteStore,
    passwords: PasswordStore,
    show_listing_after_change: bool,
}

impl Default for NotepassApi {
    fn default() -> Self {
        Self::new(NoteStore::new(), PasswordStore::new())
    }
}

impl NotepassApi {
    pub fn new(notes: NoteStore, passwords: PasswordStore) -> Self {
        Self {
            notes,
            passwords,
            show_listing_after_change: true,
        }
    }

    /// Whether add/delete of a note also returns the updated listing.
    pub fn with_listing_after_change(mut self, enabled: bool) -> Self {
        self.show_listing_after_change = enabled;
        self
    }

    pub fn add_note(&mut self, content: &str) -> CmdResult {
        commands::notes::add(&mut self.notes, content, self.show_listing_after_change)
    }

    pub fn list_notes(&self) -> CmdResult {
        commands::notes::list(&self.notes)
    }

    pub fn delete_note(&mut self, raw_id: &str) -> Result<CmdResult> {
        commands::notes::delete(&mut self.notes, raw_id, self.show_listing_after_change)
    }

    pub fn add_password(&mut self, service: &str, password: &str) -> Result<CmdResult> {
        commands::passwords::add(&mut self.passwords, service, password)
    }

    pub fn get_password(&self, service: &str) -> Result<CmdResult> {
        commands::passwords::get(&self.passwords, service)
    }

    pub fn delete_password(&mut self, service: &str) -> Result<CmdResult> {
        commands::passwords::delete(&mut self.passwords, service)
    }

    pub fn services(&self) -> CmdResult {
        commands::passwords::services(&self.passwords)
    }

    pub fn config(&self, dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(dir, action)
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn passwords(&self) -> &PasswordStore {
        &self.passwords
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RevealedPassword};
