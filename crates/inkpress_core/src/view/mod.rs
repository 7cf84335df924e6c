//! Presentation layer over the notes store.
//!
//! # Responsibility
//! - Project store state into a surface-independent presentation model.
//! - Translate user gestures into store calls and editor transitions.
//!
//! # Invariants
//! - Projections in `render` are pure functions of their inputs.
//! - Prompts, background work and time are injected, never global.

pub mod capability;
pub mod coordinator;
pub mod editor;
pub mod render;
pub mod toast;
