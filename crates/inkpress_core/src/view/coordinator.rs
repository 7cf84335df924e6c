//! Gesture handling between the notes store and the presentation surface.
//!
//! # Responsibility
//! - Map user gestures (create, select, save, delete, search, theme) to store
//!   operations and editor state transitions.
//! - Expose the current presentation model for the surface to draw.
//!
//! # Invariants
//! - Search never mutates the store.
//! - Delete only runs after the injected confirmation returns `true`.
//! - Toasts and background registration never affect note data.

use super::capability::{BackgroundRegistration, DeleteConfirmation, ImageUpload};
use super::editor::{EditorDraft, EditorState};
use super::render::{render_editor, render_list, ListMode, NoteListView, Presentation};
use super::toast::Toast;
use crate::clock::{Clock, SystemClock};
use crate::model::note::NoteId;
use crate::storage::{KeyValueStorage, StorageKeys, StorageResult};
use crate::store::notes_store::NotesStore;
use crate::store::theme::{load_theme, save_theme, Theme};
use crate::store::StoreResult;
use crate::text::word_count;
use log::{info, warn};

pub const SAVED_MESSAGE: &str = "Note saved";
pub const DELETED_MESSAGE: &str = "Note deleted";
pub const IMAGE_ADDED_MESSAGE: &str = "Image added";
pub const IMAGE_REJECTED_MESSAGE: &str = "Please select an image file";

/// Session-scoped view coordinator owning the notes store.
pub struct NotesCoordinator<S: KeyValueStorage, C: Clock = SystemClock> {
    store: NotesStore<S, C>,
    keys: StorageKeys,
    editor: EditorState,
    draft: EditorDraft,
    search_query: String,
    theme: Theme,
    toast: Option<Toast>,
    registration_attempted: bool,
}

impl<S: KeyValueStorage, C: Clock> NotesCoordinator<S, C> {
    /// Wraps a loaded store using the default storage keys.
    pub fn new(store: NotesStore<S, C>) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    /// Wraps a loaded store; the theme preference is read from `keys.theme`.
    pub fn with_keys(store: NotesStore<S, C>, keys: StorageKeys) -> Self {
        let theme = load_theme(store.storage(), &keys.theme);
        Self {
            store,
            keys,
            editor: EditorState::Closed,
            draft: EditorDraft::default(),
            search_query: String::new(),
            theme,
            toast: None,
            registration_attempted: false,
        }
    }

    /// Runs the one-time background registration.
    ///
    /// Returns `false` when registration was already attempted. Failures are
    /// logged and otherwise ignored.
    pub fn start(&mut self, registration: &mut impl BackgroundRegistration) -> bool {
        if self.registration_attempted {
            return false;
        }
        self.registration_attempted = true;

        match registration.register() {
            Ok(()) => info!("event=background_register module=view status=ok"),
            Err(err) => warn!("event=background_register module=view status=error error={err}"),
        }
        true
    }

    pub fn store(&self) -> &NotesStore<S, C> {
        &self.store
    }

    pub fn into_store(self) -> NotesStore<S, C> {
        self.store
    }

    pub fn editor_state(&self) -> &EditorState {
        &self.editor
    }

    pub fn draft(&self) -> &EditorDraft {
        &self.draft
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Toast still visible at the current clock time.
    pub fn active_toast(&self) -> Option<&Toast> {
        let now = self.store.clock().now();
        self.toast.as_ref().filter(|toast| toast.is_visible_at(now))
    }

    /// Creates a note and opens it for editing.
    ///
    /// Clears any active search so the new note is listed.
    pub fn create_note(&mut self) -> StoreResult<NoteId> {
        let id = self.store.create()?;
        self.search_query.clear();
        self.select_note(&id);
        Ok(id)
    }

    /// Opens `id` in the editor; unknown ids leave the state unchanged.
    pub fn select_note(&mut self, id: &NoteId) -> bool {
        let Some(note) = self.store.find(id) else {
            return false;
        };
        self.draft = EditorDraft::from_note(note);
        self.editor = EditorState::Open(note.id.clone());
        true
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Live word count of the draft content.
    pub fn word_count(&self) -> usize {
        word_count(&self.draft.content)
    }

    /// Saves the draft into the open note.
    ///
    /// Returns `Ok(false)` when the editor is closed or the note is gone.
    pub fn save(&mut self) -> StoreResult<bool> {
        let EditorState::Open(id) = &self.editor else {
            return Ok(false);
        };

        let saved = self
            .store
            .update(id, self.draft.title.clone(), self.draft.content.clone())?;
        if saved {
            self.show_toast(SAVED_MESSAGE);
        }
        Ok(saved)
    }

    /// Deletes the open note after explicit confirmation.
    ///
    /// Declining, a closed editor or a missing note all return `Ok(false)`
    /// without side effects. On success the editor closes.
    pub fn delete(&mut self, confirmation: &mut impl DeleteConfirmation) -> StoreResult<bool> {
        let Some(note) = self.editor.open_id().and_then(|id| self.store.find(id)) else {
            return Ok(false);
        };

        if !confirmation.confirm_delete(note) {
            info!(
                "event=note_delete module=view status=declined note_id={}",
                note.id
            );
            return Ok(false);
        }

        let id = note.id.clone();
        let removed = self.store.delete(&id)?;
        if removed {
            self.show_toast(DELETED_MESSAGE);
            self.close_editor();
        }
        Ok(removed)
    }

    /// Updates the search filter and returns the filtered list.
    pub fn search(&mut self, query: impl Into<String>) -> NoteListView {
        self.search_query = query.into();
        self.list_view()
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
        self.draft = EditorDraft::default();
    }

    pub fn set_theme(&mut self, theme: Theme) -> StorageResult<()> {
        self.theme = theme;
        save_theme(self.store.storage_mut(), &self.keys.theme, theme)
    }

    pub fn toggle_theme(&mut self) -> StorageResult<Theme> {
        let next = self.theme.toggle();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Validates a picked file before the surface embeds it.
    ///
    /// Non-image files are rejected with a toast and returned as `None`.
    pub fn attach_image(&mut self, upload: ImageUpload) -> Option<ImageUpload> {
        if !upload.is_image() {
            info!(
                "event=image_attach module=view status=rejected media_type={}",
                upload.media_type
            );
            self.show_toast(IMAGE_REJECTED_MESSAGE);
            return None;
        }

        info!(
            "event=image_attach module=view status=ok bytes={}",
            upload.bytes.len()
        );
        self.show_toast(IMAGE_ADDED_MESSAGE);
        Some(upload)
    }

    /// Note list for the current filter and selection.
    pub fn list_view(&self) -> NoteListView {
        let selected = self.editor.open_id();
        if self.search_query.is_empty() {
            render_list(self.store.notes(), selected, ListMode::All)
        } else {
            render_list(
                self.store.search(&self.search_query),
                selected,
                ListMode::Search,
            )
        }
    }

    pub fn presentation(&self) -> Presentation {
        let editor = self
            .editor
            .open_id()
            .and_then(|id| self.store.find(id))
            .map(|note| render_editor(note, Some(&self.draft)));
        Presentation {
            list: self.list_view(),
            editor,
        }
    }

    fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast::new(message, self.store.clock().now()));
    }
}
