//! Pure projections from notes to a presentation model.
//!
//! # Responsibility
//! - Build list rows and the editor panel without touching any surface.
//! - Own user-visible placeholder texts and timestamp labels.
//!
//! # Invariants
//! - Rendering never mutates notes or storage.
//! - At most one list row is marked selected.

use super::editor::EditorDraft;
use crate::model::note::{Note, NoteId};
use crate::text::{preview_text, word_count};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Placeholder for an empty collection.
pub const EMPTY_LIST_MESSAGE: &str = "No notes yet. Create one!";
/// Placeholder for a search without hits.
pub const NO_MATCHES_MESSAGE: &str = "No matching notes found";
/// Layout used for every timestamp label.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which sequence a list projection was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    All,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: NoteId,
    /// Title, or the placeholder title when empty.
    pub title: String,
    pub preview: String,
    pub updated_label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteListView {
    Empty { message: &'static str },
    Items(Vec<NoteListItem>),
}

impl NoteListView {
    pub fn items(&self) -> &[NoteListItem] {
        match self {
            Self::Empty { .. } => &[],
            Self::Items(items) => items,
        }
    }

    pub fn selected_id(&self) -> Option<&NoteId> {
        self.items()
            .iter()
            .find(|item| item.selected)
            .map(|item| &item.id)
    }
}

/// Editor panel for the open note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_label: String,
    pub updated_label: String,
    /// `Created: <created> | Updated: <updated>`.
    pub date_line: String,
    pub word_count: usize,
    /// `<n> words`.
    pub word_count_label: String,
}

/// Whole-screen projection: note list plus optional editor panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub list: NoteListView,
    pub editor: Option<EditorView>,
}

/// Projects the full collection with `selected` open in the editor.
///
/// An unknown `selected` id renders no editor and no selected row.
pub fn render(notes: &[Note], selected: Option<&NoteId>) -> Presentation {
    let open = selected.and_then(|id| notes.iter().find(|note| &note.id == id));
    Presentation {
        list: render_list(notes, open.map(|note| &note.id), ListMode::All),
        editor: open.map(|note| render_editor(note, None)),
    }
}

/// Builds list rows for `notes` in the given order.
pub fn render_list<'a>(
    notes: impl IntoIterator<Item = &'a Note>,
    selected: Option<&NoteId>,
    mode: ListMode,
) -> NoteListView {
    let items: Vec<NoteListItem> = notes
        .into_iter()
        .map(|note| NoteListItem {
            id: note.id.clone(),
            title: note.display_title().to_string(),
            preview: preview_text(&note.content),
            updated_label: format_timestamp(note.updated_at.instant()),
            selected: selected == Some(&note.id),
        })
        .collect();

    if items.is_empty() {
        let message = match mode {
            ListMode::All => EMPTY_LIST_MESSAGE,
            ListMode::Search => NO_MATCHES_MESSAGE,
        };
        return NoteListView::Empty { message };
    }
    NoteListView::Items(items)
}

/// Builds the editor panel; a draft overrides the stored title/content.
pub fn render_editor(note: &Note, draft: Option<&EditorDraft>) -> EditorView {
    let (title, content) = match draft {
        Some(draft) => (draft.title.clone(), draft.content.clone()),
        None => (note.title.clone(), note.content.clone()),
    };
    let created_label = format_timestamp(note.created_at.instant());
    let updated_label = format_timestamp(note.updated_at.instant());
    let words = word_count(&content);

    EditorView {
        id: note.id.clone(),
        date_line: format!("Created: {created_label} | Updated: {updated_label}"),
        title,
        content,
        created_label,
        updated_label,
        word_count: words,
        word_count_label: format!("{words} words"),
    }
}

/// Formats a timestamp in the local timezone.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    format_timestamp_in(value, &Local)
}

pub fn format_timestamp_in<Tz>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}
