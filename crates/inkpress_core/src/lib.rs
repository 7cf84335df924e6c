//! Core domain logic for InkPress notes.
//! This crate is the single source of truth for note storage and rendering.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod text;
pub mod view;

pub use clock::{Clock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, DEFAULT_NOTE_TITLE};
pub use model::timestamp::Timestamp;
pub use storage::{
    KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, StorageKeys, StorageResult,
};
pub use store::notes_store::NotesStore;
pub use store::theme::Theme;
pub use store::{StoreError, StoreResult};
pub use text::{preview_text, strip_markup, word_count};
pub use view::capability::{
    BackgroundRegistration, DeleteConfirmation, ImageUpload, NoRegistration,
};
pub use view::coordinator::NotesCoordinator;
pub use view::editor::{EditorDraft, EditorState};
pub use view::render::{
    render, render_editor, render_list, EditorView, ListMode, NoteListItem, NoteListView,
    Presentation,
};
pub use view::toast::Toast;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
