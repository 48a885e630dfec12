use crate::codec::ObfuscationCodec;
use crate::error::Result;
use crate::model::{Obfuscated, ServiceKey};
use std::collections::HashMap;
use tracing::debug;

/// Service passwords, held only in obfuscated form.
///
/// Service names are normalized (see [`ServiceKey::normalize`]) on every call,
/// so `"GitHub "` and `"github"` address the same entry. Plaintext leaves the
/// store only through [`PasswordStore::get_password`].
#[derive(Debug, Default)]
pub struct PasswordStore {
    entries: HashMap<ServiceKey, Obfuscated>,
    codec: ObfuscationCodec,
}

impl PasswordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `password` for `service`, replacing any earlier entry.
    ///
    /// Fails only when the password holds characters the codec cannot shift.
    pub fn add_password(&mut self, service: &str, password: &str) -> Result<()> {
        let key = ServiceKey::normalize(service);
        let stored = Obfuscated::new(self.codec.encode(password)?);
        let replaced = self.entries.insert(key.clone(), stored).is_some();
        debug!(service = %key, replaced, "password stored");
        Ok(())
    }

    /// `Ok(None)` when nothing is stored for `service`.
    pub fn get_password(&self, service: &str) -> Result<Option<String>> {
        let key = ServiceKey::normalize(service);
        match self.entries.get(&key) {
            Some(stored) => Ok(Some(self.codec.decode(stored.as_str())?)),
            None => {
                debug!(service = %key, "password not found");
                Ok(None)
            }
        }
    }

    /// Returns whether an entry for `service` was present.
    pub fn delete_password(&mut self, service: &str) -> bool {
        let key = ServiceKey::normalize(service);
        let removed = self.entries.remove(&key).is_some();
        debug!(service = %key, removed, "password delete");
        removed
    }

    /// Stored service names, sorted.
    pub fn services(&self) -> Vec<&ServiceKey> {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
