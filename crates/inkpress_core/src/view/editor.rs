//! Editor state machine and draft buffers.
//!
//! States are `Closed` and `Open(id)`. Create or select opens a note, save
//! keeps it open, delete or an explicit close returns to `Closed`.

use crate::model::note::{Note, NoteId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Open(NoteId),
}

impl EditorState {
    pub fn open_id(&self) -> Option<&NoteId> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(id),
        }
    }
}

/// Unsaved title/content bound to the editable surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorDraft {
    pub title: String,
    pub content: String,
}

impl EditorDraft {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}
