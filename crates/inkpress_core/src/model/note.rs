//! Note domain model.
//!
//! # Responsibility
//! - Define the note record and its stable identifier type.
//! - Pin the persisted field names and timestamp encoding.
//!
//! # Invariants
//! - `id` is opaque; ids read from storage are kept verbatim.
//! - Timestamps keep their stored text, so loading and persisting a
//!   collection round-trips byte-for-byte.
//! - `updated_at >= created_at` after every edit.

use super::timestamp::Timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Title assigned to freshly created notes.
pub const DEFAULT_NOTE_TITLE: &str = "Untitled Note";

/// Opaque, collection-unique note identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as stored.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user-authored note with rich-text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    /// Free text; may be empty.
    pub title: String,
    /// Rich-text markup, opaque to the store.
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Note {
    /// Creates an empty note stamped with `now`.
    pub fn new(id: NoteId, now: DateTime<Utc>) -> Self {
        let now = Timestamp::from_instant(now);
        Self {
            id,
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Replaces title and content and refreshes `updated_at`.
    ///
    /// A clock running backwards is clamped to `created_at`.
    pub fn apply_edit(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        self.title = title.into();
        self.content = content.into();
        let now = Timestamp::from_instant(now);
        self.updated_at = if now < self.created_at {
            self.created_at.clone()
        } else {
            now
        };
    }

    /// Title shown to users; empty titles fall back to the default title.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_NOTE_TITLE
        } else {
            self.title.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteId, DEFAULT_NOTE_TITLE};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn new_note_starts_with_default_title_and_equal_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let note = Note::new(NoteId::from("n1"), now);
        assert_eq!(note.title, DEFAULT_NOTE_TITLE);
        assert!(note.content.is_empty());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn apply_edit_clamps_backwards_clock() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let mut note = Note::new(NoteId::from("n1"), now);
        note.apply_edit("t", "c", now - Duration::hours(1));
        assert_eq!(note.updated_at, note.created_at);
    }

    #[test]
    fn display_title_falls_back_for_empty_title() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let mut note = Note::new(NoteId::from("n1"), now);
        note.title.clear();
        assert_eq!(note.display_title(), "Untitled Note");
    }

    #[test]
    fn serializes_with_camel_case_and_millisecond_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let note = Note::new(NoteId::from("1714557600000"), now);
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1714557600000","title":"Untitled Note","content":"","createdAt":"2024-05-01T10:00:00.000Z","updatedAt":"2024-05-01T10:00:00.000Z"}"#
        );
    }

    #[test]
    fn deserialized_note_reserializes_verbatim() {
        let raw = r#"{"id":"a","title":"t","content":"c","createdAt":"2024-05-01T12:00:00.000+02:00","updatedAt":"2024-05-01T10:00:00.123456Z"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&note).unwrap(), raw);
        assert!(note.updated_at > note.created_at);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(NoteId::generate(), NoteId::generate());
    }
}
