use crate::error::NotepassError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a note. Issued sequentially from 1 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(pub u64);

impl NoteId {
    pub const FIRST: NoteId = NoteId(1);

    pub fn next(self) -> NoteId {
        NoteId(self.0 + 1)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = NotepassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(NoteId)
            .map_err(|_| NotepassError::InvalidNoteId(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, content: String) -> Self {
        Self { id, content }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} | Note: {}", self.id, self.content)
    }
}

/// A service name reduced to its lookup form: surrounding whitespace trimmed,
/// lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceKey(String);

impl ServiceKey {
    pub fn normalize(service: &str) -> Self {
        Self(service.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A password in its stored, shifted form. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Obfuscated(String);

impl Obfuscated {
    pub(crate) fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Obfuscated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Obfuscated(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!("3".parse::<NoteId>().unwrap(), NoteId(3));
        assert_eq!(" 12 ".parse::<NoteId>().unwrap(), NoteId(12));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for input in ["abc", "", "1.5", "-2", "3x"] {
            let err = input.parse::<NoteId>().unwrap_err();
            assert!(matches!(err, NotepassError::InvalidNoteId(ref s) if s == input));
        }
    }

    #[test]
    fn note_display_matches_listing_format() {
        let note = Note::new(NoteId(7), "buy milk".to_string());
        assert_eq!(note.to_string(), "ID: 7 | Note: buy milk");
    }

    #[test]
    fn service_key_is_trimmed_and_lowercased() {
        assert_eq!(ServiceKey::normalize("  Example.COM\t").as_str(), "example.com");
        assert_eq!(
            ServiceKey::normalize("GitHub"),
            ServiceKey::normalize(" github ")
        );
    }

    #[test]
    fn obfuscated_debug_is_redacted() {
        let stored = Obfuscated::new("xjhwjy".to_string());
        assert_eq!(format!("{:?}", stored), "Obfuscated(***)");
    }
}
