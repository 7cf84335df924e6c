//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by store and view layers.
//! - Own the persisted JSON shape of a note.
//!
//! # Invariants
//! - Every note is identified by a stable, collection-unique `NoteId`.
//! - `updated_at` is never earlier than `created_at`.

pub mod note;
pub mod timestamp;
