//! Notes collection with write-through persistence.
//!
//! # Responsibility
//! - Provide create/update/delete/find/search over the notes collection.
//! - Serialize the whole collection to storage after each mutation.
//!
//! # Invariants
//! - Collection order is most-recent-first by creation; `create` prepends.
//! - Operations on unknown ids are no-ops reported as `false`/`None`.
//! - A completed mutation is always followed by a full persist; failed
//!   persists are returned and the in-memory mutation stays applied.

use super::{StoreError, StoreResult};
use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteId};
use crate::storage::{KeyValueStorage, StorageKeys};
use crate::text::strip_markup;
use log::{debug, info, warn};

/// Authoritative notes collection bound to one storage backend.
pub struct NotesStore<S: KeyValueStorage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    notes_key: String,
    notes: Vec<Note>,
}

impl<S: KeyValueStorage> NotesStore<S> {
    /// Loads the collection from the default key using the system clock.
    ///
    /// # Errors
    /// - `StoreError::Storage` when the backend read fails.
    /// - `StoreError::Malformed` when the persisted value is not a note array.
    pub fn load(storage: S) -> StoreResult<Self> {
        Self::load_with(storage, SystemClock, &StorageKeys::default())
    }

    /// Lenient variant of [`NotesStore::load`]; failures read as empty.
    pub fn load_or_empty(storage: S) -> Self {
        Self::load_or_empty_with(storage, SystemClock, &StorageKeys::default())
    }
}

impl<S: KeyValueStorage, C: Clock> NotesStore<S, C> {
    /// Loads the collection with an explicit clock and key set.
    pub fn load_with(storage: S, clock: C, keys: &StorageKeys) -> StoreResult<Self> {
        let notes = read_notes(&storage, &keys.notes)?;
        info!(
            "event=notes_load module=store status=ok count={}",
            notes.len()
        );
        Ok(Self {
            storage,
            clock,
            notes_key: keys.notes.clone(),
            notes,
        })
    }

    /// Loads the collection, treating unreadable or malformed data as absent.
    ///
    /// The slot held no valid collection to begin with, so starting empty
    /// loses nothing; the next persist overwrites the bad value.
    pub fn load_or_empty_with(storage: S, clock: C, keys: &StorageKeys) -> Self {
        let notes = match read_notes(&storage, &keys.notes) {
            Ok(notes) => {
                info!(
                    "event=notes_load module=store status=ok count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=fallback_empty error={}",
                    err
                );
                Vec::new()
            }
        };
        Self {
            storage,
            clock,
            notes_key: keys.notes.clone(),
            notes,
        }
    }

    /// Replaces the in-memory collection with the persisted one.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.notes = read_notes(&self.storage, &self.notes_key)?;
        Ok(())
    }

    /// Writes the full collection, overwriting the previous value.
    pub fn persist(&mut self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.notes).map_err(StoreError::Serialize)?;
        self.storage.set_item(&self.notes_key, &encoded)?;
        debug!(
            "event=notes_persist module=store status=ok count={} bytes={}",
            self.notes.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Creates an empty note at the front of the collection and returns its id.
    pub fn create(&mut self) -> StoreResult<NoteId> {
        let note = Note::new(self.fresh_id(), self.clock.now());
        let id = note.id.clone();
        self.notes.insert(0, note);
        self.persist()?;
        info!(
            "event=note_create module=store status=ok note_id={} count={}",
            id,
            self.notes.len()
        );
        Ok(id)
    }

    /// Overwrites title and content of one note.
    ///
    /// Returns `Ok(false)` without touching storage when `id` is unknown.
    pub fn update(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<bool> {
        let now = self.clock.now();
        let Some(note) = self.notes.iter_mut().find(|note| &note.id == id) else {
            info!("event=note_update module=store status=not_found note_id={id}");
            return Ok(false);
        };

        note.apply_edit(title, content, now);
        self.persist()?;
        info!("event=note_update module=store status=ok note_id={id}");
        Ok(true)
    }

    /// Removes one note; returns whether a note was removed.
    pub fn delete(&mut self, id: &NoteId) -> StoreResult<bool> {
        let Some(index) = self.notes.iter().position(|note| &note.id == id) else {
            info!("event=note_delete module=store status=not_found note_id={id}");
            return Ok(false);
        };

        self.notes.remove(index);
        self.persist()?;
        info!(
            "event=note_delete module=store status=ok note_id={} count={}",
            id,
            self.notes.len()
        );
        Ok(true)
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Case-insensitive substring search over title and stripped content.
    ///
    /// Results keep collection order; an empty query matches every note.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        let hits: Vec<&Note> = self
            .notes
            .iter()
            .filter(|note| search_corpus(note).contains(needle.as_str()))
            .collect();
        debug!(
            "event=notes_search module=store status=ok query_len={} hits={}",
            query.chars().count(),
            hits.len()
        );
        hits
    }

    /// Notes in collection order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn fresh_id(&self) -> NoteId {
        loop {
            let id = NoteId::generate();
            if self.find(&id).is_none() {
                return id;
            }
        }
    }
}

fn read_notes<S: KeyValueStorage>(storage: &S, key: &str) -> StoreResult<Vec<Note>> {
    match storage.get_item(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Malformed),
        None => Ok(Vec::new()),
    }
}

fn search_corpus(note: &Note) -> String {
    format!("{} {}", note.title, strip_markup(&note.content)).to_lowercase()
}
