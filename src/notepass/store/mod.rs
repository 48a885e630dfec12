//! # Storage Layer
//!
//! Two in-memory stores, each owning its entries for as long as the owning
//! session lives:
//!
//! - [`notes::NoteStore`]: notes keyed by a sequential [`NoteId`](crate::model::NoteId)
//! - [`passwords::PasswordStore`]: obfuscated passwords keyed by a normalized
//!   [`ServiceKey`](crate::model::ServiceKey)
//!
//! Nothing is persisted. Stores are plain values: whoever creates them owns
//! them and hands them to the API facade, there is no process-wide instance.
//!
//! Missing keys are a normal outcome here. Lookups return `Option` and deletes
//! return `bool`; the stores never fail on absence.

pub mod notes;
pub mod passwords;

pub use notes::NoteStore;
pub use passwords::PasswordStore;

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    #[derive(Default)]
    pub struct StoreFixture {
        pub notes: NoteStore,
        pub passwords: PasswordStore,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.notes.add_note(format!("Note {}", i + 1));
            }
            self
        }

        pub fn with_password(mut self, service: &str, password: &str) -> Self {
            self.passwords.add_password(service, password).unwrap();
            self
        }
    }
}
