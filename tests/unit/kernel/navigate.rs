use compact_str::CompactString;

use crate::kernel::error::ErrorKind;
use crate::kernel::navigate::{CursorTarget, Navigator};
use crate::models::{DocumentSet, EntryId, WorkspaceStore};
use crate::services::search::SearchMatch;

fn fixture() -> (WorkspaceStore, DocumentSet, EntryId) {
    let mut ws = WorkspaceStore::new("workspace");
    let file = ws
        .create_file(ws.root(), "a.txt", "one\ntwo foo\nthree")
        .unwrap();
    (ws, DocumentSet::new(), file)
}

fn hit(file_id: EntryId) -> SearchMatch {
    SearchMatch {
        file_id,
        file_name: CompactString::from("a.txt"),
        line_number: 2,
        column: 5,
        line_text: "two foo".to_string(),
        match_text: "foo".to_string(),
    }
}

#[test]
fn reveal_parks_target_until_file_renders() {
    let (ws, mut docs, file) = fixture();
    let mut nav = Navigator::new();

    let emitted = nav.reveal_match(&ws, &mut docs, &hit(file)).unwrap();
    assert_eq!(emitted, None);
    assert!(docs.is_open(file));
    assert_eq!(docs.active_id(), Some(file));

    let target = nav.notify_rendered(file).unwrap();
    assert_eq!(
        target,
        CursorTarget {
            file_id: file,
            line: 2,
            column: 5,
            selection_len: 3,
        }
    );
    assert!(nav.pending().is_none());
}

#[test]
fn reveal_emits_immediately_when_file_already_rendered() {
    let (ws, mut docs, file) = fixture();
    let mut nav = Navigator::new();
    nav.notify_rendered(file);

    let emitted = nav.reveal_match(&ws, &mut docs, &hit(file)).unwrap();
    assert!(emitted.is_some());
    assert!(nav.pending().is_none());
}

#[test]
fn newer_request_supersedes_pending_one() {
    let (mut ws, mut docs, file_a) = fixture();
    let file_b = ws.create_file(ws.root(), "b.txt", "line").unwrap();
    let mut nav = Navigator::new();

    nav.reveal_match(&ws, &mut docs, &hit(file_a)).unwrap();
    nav.go_to_line(&ws, &mut docs, file_b, 1).unwrap();

    // the superseded target must never fire
    assert_eq!(nav.notify_rendered(file_a), None);
    let target = nav.notify_rendered(file_b).unwrap();
    assert_eq!(target.file_id, file_b);
    assert_eq!(target.selection_len, 0);
}

#[test]
fn rendered_notification_for_other_file_leaves_pending_alone() {
    let (mut ws, mut docs, file_a) = fixture();
    let file_b = ws.create_file(ws.root(), "b.txt", "line").unwrap();
    let mut nav = Navigator::new();

    nav.reveal_match(&ws, &mut docs, &hit(file_a)).unwrap();
    assert_eq!(nav.notify_rendered(file_b), None);
    assert!(nav.pending().is_some());
}

#[test]
fn go_to_line_validates_bounds() {
    let (ws, mut docs, file) = fixture();
    let mut nav = Navigator::new();

    assert_eq!(
        nav.go_to_line(&ws, &mut docs, file, 0),
        Err(ErrorKind::OutOfRange {
            line: 0,
            line_count: 3
        })
    );
    assert_eq!(
        nav.go_to_line(&ws, &mut docs, file, 4),
        Err(ErrorKind::OutOfRange {
            line: 4,
            line_count: 3
        })
    );
    // a failed request opens nothing and parks nothing
    assert!(docs.open_ids().is_empty());
    assert!(nav.pending().is_none());

    assert!(nav.go_to_line(&ws, &mut docs, file, 3).is_ok());
    assert!(docs.is_open(file));
}

#[test]
fn trailing_newline_yields_an_addressable_empty_last_line() {
    let mut ws = WorkspaceStore::new("workspace");
    let file = ws.create_file(ws.root(), "a.txt", "one\n").unwrap();
    let mut docs = DocumentSet::new();
    let mut nav = Navigator::new();

    assert!(nav.go_to_line(&ws, &mut docs, file, 2).is_ok());
    assert_eq!(
        nav.go_to_line(&ws, &mut docs, file, 3),
        Err(ErrorKind::OutOfRange {
            line: 3,
            line_count: 2
        })
    );
}

#[test]
fn go_to_line_rejects_folders_and_missing_entries() {
    let (mut ws, mut docs, file) = fixture();
    let folder = ws.create_folder(ws.root(), "docs").unwrap();
    let mut nav = Navigator::new();

    assert_eq!(
        nav.go_to_line(&ws, &mut docs, folder, 1),
        Err(ErrorKind::NotAFile)
    );

    ws.delete(file).unwrap();
    assert_eq!(
        nav.go_to_line(&ws, &mut docs, file, 1),
        Err(ErrorKind::NotFound)
    );
}

#[test]
fn forget_file_clears_pending_and_rendered_state() {
    let (ws, mut docs, file) = fixture();
    let mut nav = Navigator::new();
    nav.reveal_match(&ws, &mut docs, &hit(file)).unwrap();

    nav.forget_file(file);
    assert!(nav.pending().is_none());
    assert_eq!(nav.notify_rendered(file), None);
}
