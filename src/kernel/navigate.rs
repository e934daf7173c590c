//! Navigation coordinator: bridges search hits and go-to-line requests
//! to the external editor surface.
//!
//! The surface renders asynchronously, so a cursor placement for a file
//! that is not on screen yet is parked in a single-slot mailbox and
//! released when the surface reports that file rendered. A newer request
//! overwrites an unserviced one; there is no timeout.

use crate::kernel::error::ErrorKind;
use crate::models::{DocumentSet, EntryId, WorkspaceStore};
use crate::services::search::engine::line_count;
use crate::services::search::SearchMatch;

/// Cursor placement command for the editor surface. `selection_len`
/// is in UTF-16 code units, 0 means a bare caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorTarget {
    pub file_id: EntryId,
    pub line: usize,
    pub column: usize,
    pub selection_len: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    pending: Option<CursorTarget>,
    rendered: Option<EntryId>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<CursorTarget> {
        self.pending
    }

    /// Open the match's file and produce its cursor target. Returns the
    /// target when the surface already shows the file; otherwise parks it
    /// and returns `None`.
    pub fn reveal_match(
        &mut self,
        workspace: &WorkspaceStore,
        documents: &mut DocumentSet,
        hit: &SearchMatch,
    ) -> Result<Option<CursorTarget>, ErrorKind> {
        documents.open(workspace, hit.file_id)?;
        let target = CursorTarget {
            file_id: hit.file_id,
            line: hit.line_number,
            column: hit.column,
            selection_len: hit.match_text.encode_utf16().count(),
        };
        Ok(self.submit(target))
    }

    /// Open the file and move the caret to the start of `line` (1-based).
    pub fn go_to_line(
        &mut self,
        workspace: &WorkspaceStore,
        documents: &mut DocumentSet,
        file_id: EntryId,
        line: usize,
    ) -> Result<Option<CursorTarget>, ErrorKind> {
        let entry = workspace.entry(file_id).ok_or(ErrorKind::NotFound)?;
        let content = entry.content.as_deref().ok_or(ErrorKind::NotAFile)?;
        let total = line_count(content);
        if line < 1 || line > total {
            return Err(ErrorKind::OutOfRange {
                line,
                line_count: total,
            });
        }

        documents.open(workspace, file_id)?;
        let target = CursorTarget {
            file_id,
            line,
            column: 1,
            selection_len: 0,
        };
        Ok(self.submit(target))
    }

    /// The surface reports a file's editor finished rendering. Releases a
    /// matching pending target, if any.
    pub fn notify_rendered(&mut self, file_id: EntryId) -> Option<CursorTarget> {
        self.rendered = Some(file_id);
        match self.pending {
            Some(target) if target.file_id == file_id => self.pending.take(),
            _ => None,
        }
    }

    /// Drop any state tied to a file that no longer exists.
    pub fn forget_file(&mut self, file_id: EntryId) {
        if self.pending.is_some_and(|t| t.file_id == file_id) {
            self.pending = None;
        }
        if self.rendered == Some(file_id) {
            self.rendered = None;
        }
    }

    fn submit(&mut self, target: CursorTarget) -> Option<CursorTarget> {
        if self.rendered == Some(target.file_id) {
            self.pending = None;
            Some(target)
        } else {
            // supersedes any unserviced pending target
            self.pending = Some(target);
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/navigate.rs"]
mod tests;
