//! Persisted application state: the notes collection and the theme preference.
//!
//! # Responsibility
//! - Own the authoritative in-memory notes collection.
//! - Write the full collection back to storage after every mutation.
//!
//! # Invariants
//! - The collection is one persisted aggregate under one key.
//! - The theme preference is stored independently of notes.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod notes_store;
pub mod theme;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for load and persist paths.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    /// Persisted collection is not a valid JSON array of notes.
    Malformed(serde_json::Error),
    /// In-memory collection could not be encoded.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed persisted notes: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed(err) | Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
