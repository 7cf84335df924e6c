use chrono::{DateTime, Duration, TimeZone, Utc};
use inkpress_core::view::coordinator::{
    DELETED_MESSAGE, IMAGE_ADDED_MESSAGE, IMAGE_REJECTED_MESSAGE, SAVED_MESSAGE,
};
use inkpress_core::view::render::{EMPTY_LIST_MESSAGE, NO_MATCHES_MESSAGE};
use inkpress_core::{
    BackgroundRegistration, Clock, EditorState, ImageUpload, MemoryStorage, NoRegistration, Note,
    NoteId, NoteListView, NotesCoordinator, NotesStore, StorageKeys, Theme,
};
use std::cell::Cell;

struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            now: Cell::new(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()),
        }
    }

    fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

#[derive(Default)]
struct CountingRegistration {
    calls: usize,
    fail: bool,
}

impl BackgroundRegistration for CountingRegistration {
    fn register(&mut self) -> Result<(), String> {
        self.calls += 1;
        if self.fail {
            Err("unsupported".to_string())
        } else {
            Ok(())
        }
    }
}

fn coordinator(clock: &ManualClock) -> NotesCoordinator<MemoryStorage, &ManualClock> {
    let store =
        NotesStore::load_with(MemoryStorage::new(), clock, &StorageKeys::default()).unwrap();
    NotesCoordinator::new(store)
}

fn accept(_: &Note) -> bool {
    true
}

#[test]
fn empty_collection_renders_placeholder_and_closed_editor() {
    let clock = ManualClock::new();
    let view = coordinator(&clock);

    let presentation = view.presentation();
    assert_eq!(
        presentation.list,
        NoteListView::Empty {
            message: EMPTY_LIST_MESSAGE
        }
    );
    assert!(presentation.editor.is_none());
    assert_eq!(view.editor_state(), &EditorState::Closed);
}

#[test]
fn create_opens_new_note_and_selects_it() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);

    let id = view.create_note().unwrap();
    assert_eq!(view.editor_state(), &EditorState::Open(id.clone()));

    let presentation = view.presentation();
    assert_eq!(presentation.list.selected_id(), Some(&id));
    let editor = presentation.editor.expect("editor should be open");
    assert_eq!(editor.title, "Untitled Note");
    assert_eq!(editor.word_count_label, "0 words");
}

#[test]
fn save_writes_draft_and_shows_transient_toast() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    let id = view.create_note().unwrap();

    view.set_draft_title("Shopping");
    view.set_draft_content("<b>milk</b> eggs");
    assert_eq!(view.word_count(), 2);

    clock.advance(Duration::seconds(10));
    assert!(view.save().unwrap());
    assert_eq!(view.editor_state(), &EditorState::Open(id.clone()));

    let note = view.store().find(&id).unwrap();
    assert_eq!(note.title, "Shopping");
    assert_eq!(note.content, "<b>milk</b> eggs");
    assert!(note.updated_at > note.created_at);

    assert_eq!(view.active_toast().map(|t| t.message.as_str()), Some(SAVED_MESSAGE));
    clock.advance(Duration::seconds(3));
    assert!(view.active_toast().is_none());

    let items = view.presentation().list;
    assert_eq!(items.items()[0].preview, "milk eggs");
}

#[test]
fn save_with_closed_editor_is_a_no_op() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    assert!(!view.save().unwrap());
    assert!(view.active_toast().is_none());
}

#[test]
fn declined_delete_has_no_side_effects() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    let id = view.create_note().unwrap();

    let mut asked = Vec::new();
    let removed = view
        .delete(&mut |note: &Note| {
            asked.push(note.id.clone());
            false
        })
        .unwrap();

    assert!(!removed);
    assert_eq!(asked, vec![id.clone()]);
    assert!(view.store().find(&id).is_some());
    assert_eq!(view.editor_state(), &EditorState::Open(id));
    assert!(view.active_toast().is_none());
}

#[test]
fn confirmed_delete_removes_note_and_closes_editor() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    let keep = view.create_note().unwrap();
    let target = view.create_note().unwrap();

    assert!(view.delete(&mut accept).unwrap());
    assert!(view.store().find(&target).is_none());
    assert_eq!(view.editor_state(), &EditorState::Closed);
    assert_eq!(view.active_toast().map(|t| t.message.as_str()), Some(DELETED_MESSAGE));

    let presentation = view.presentation();
    assert!(presentation.editor.is_none());
    assert_eq!(presentation.list.items().len(), 1);
    assert_eq!(presentation.list.items()[0].id, keep);
    assert!(!presentation.list.items()[0].selected);

    assert!(!view.delete(&mut accept).unwrap());
}

#[test]
fn search_filters_without_mutating_store() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    let recipe = view.create_note().unwrap();
    view.set_draft_title("Pancakes");
    view.set_draft_content("<p>flour, MILK</p>");
    view.save().unwrap();
    view.create_note().unwrap();
    let before = view.store().notes().to_vec();

    let hits = view.search("milk");
    assert_eq!(hits.items().len(), 1);
    assert_eq!(hits.items()[0].id, recipe);

    assert_eq!(
        view.search("zebra"),
        NoteListView::Empty {
            message: NO_MATCHES_MESSAGE
        }
    );
    assert_eq!(view.store().notes(), before.as_slice());

    assert_eq!(view.search("").items().len(), 2);
}

#[test]
fn select_and_close_follow_editor_state_machine() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    let first = view.create_note().unwrap();
    let second = view.create_note().unwrap();

    assert!(!view.select_note(&NoteId::from("unknown")));
    assert_eq!(view.editor_state(), &EditorState::Open(second));

    assert!(view.select_note(&first));
    assert_eq!(view.presentation().list.selected_id(), Some(&first));

    view.close_editor();
    assert_eq!(view.editor_state(), &EditorState::Closed);
    assert_eq!(view.presentation().list.selected_id(), None);
}

#[test]
fn theme_toggle_persists_independently_of_notes() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    assert_eq!(view.theme(), Theme::Light);

    assert_eq!(view.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(view.theme().display_attribute(), ("data-theme", "dark"));
    assert!(view.store().is_empty());

    let store = view.into_store();
    let reopened = NotesCoordinator::new(store);
    assert_eq!(reopened.theme(), Theme::Dark);
}

#[test]
fn image_attachment_rejects_non_images_without_mutation() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    let id = view.create_note().unwrap();
    let before = view.store().notes().to_vec();

    let rejected = view.attach_image(ImageUpload {
        file_name: "notes.txt".to_string(),
        media_type: "text/plain".to_string(),
        bytes: b"hello".to_vec(),
    });
    assert!(rejected.is_none());
    assert_eq!(
        view.active_toast().map(|t| t.message.as_str()),
        Some(IMAGE_REJECTED_MESSAGE)
    );
    assert_eq!(view.store().notes(), before.as_slice());

    let accepted = view.attach_image(ImageUpload {
        file_name: "cat.png".to_string(),
        media_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    });
    assert_eq!(accepted.map(|upload| upload.file_name), Some("cat.png".to_string()));
    assert_eq!(
        view.active_toast().map(|t| t.message.as_str()),
        Some(IMAGE_ADDED_MESSAGE)
    );
    assert_eq!(view.editor_state(), &EditorState::Open(id));
}

#[test]
fn background_registration_runs_once_and_failure_is_ignored() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    let mut registration = CountingRegistration {
        fail: true,
        ..Default::default()
    };

    assert!(view.start(&mut registration));
    assert!(!view.start(&mut registration));
    assert_eq!(registration.calls, 1);

    assert!(view.create_note().is_ok());
}

#[test]
fn start_without_registration_is_still_one_time() {
    let clock = ManualClock::new();
    let mut view = coordinator(&clock);
    assert!(view.start(&mut NoRegistration));
    assert!(!view.start(&mut NoRegistration));
}
