//! Every state mutation enters the kernel as one of these actions.

use crate::models::EntryId;
use crate::services::search::SearchMatch;

#[derive(Debug, Clone)]
pub enum Action {
    // workspace tree
    CreateFile {
        parent: EntryId,
        name: String,
        content: String,
    },
    CreateFolder {
        parent: EntryId,
        name: String,
    },
    DeleteEntry {
        id: EntryId,
    },
    RenameEntry {
        id: EntryId,
        new_name: String,
    },
    MoveEntry {
        id: EntryId,
        new_parent: EntryId,
    },
    UpdateContent {
        id: EntryId,
        content: String,
    },
    MarkSaved {
        id: EntryId,
    },

    // open documents
    OpenDocument {
        id: EntryId,
    },
    CloseDocument {
        id: EntryId,
    },
    SetActiveDocument {
        id: EntryId,
    },

    // search query editing
    SearchSetPattern {
        pattern: String,
    },
    SearchToggleRegex,
    SearchToggleCaseSensitive,

    // navigation
    RevealMatch(SearchMatch),
    GoToLine {
        file_id: EntryId,
        line: usize,
    },
    EditorRendered {
        file_id: EntryId,
    },
}
