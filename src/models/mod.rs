//! 数据模型层

pub mod documents;
pub mod language;
pub mod workspace;

pub use documents::{DocumentSet, DocumentsError};
pub use language::LanguageId;
pub use workspace::{EntryId, EntryKind, FileEntry, WorkspaceError, WorkspaceStore};
