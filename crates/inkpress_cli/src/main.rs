//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `inkpress_core` linkage with deterministic output.
//! - Given a database path, print the persisted note list as text.

use inkpress_core::{NoRegistration, NoteListView, NotesCoordinator, NotesStore, SqliteStorage};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("inkpress_core ping={}", inkpress_core::ping());
    println!("inkpress_core version={}", inkpress_core::core_version());

    let Some(db_path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    let storage = match SqliteStorage::open(&db_path) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("failed to open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut coordinator = NotesCoordinator::new(NotesStore::load_or_empty(storage));
    coordinator.start(&mut NoRegistration);
    println!("theme={}", coordinator.theme().as_str());
    match coordinator.list_view() {
        NoteListView::Empty { message } => println!("{message}"),
        NoteListView::Items(items) => {
            for item in items {
                println!("{}\t{}\t{}", item.updated_label, item.title, item.preview);
            }
        }
    }
    ExitCode::SUCCESS
}
