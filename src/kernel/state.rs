//! Aggregate application state owned by the store.

use crate::kernel::navigate::Navigator;
use crate::kernel::search::SearchState;
use crate::models::{DocumentSet, WorkspaceStore};
use crate::services::search::SearchLimits;

#[derive(Debug)]
pub struct AppState {
    pub workspace: WorkspaceStore,
    pub documents: DocumentSet,
    pub search: SearchState,
    pub navigator: Navigator,
    pub limits: SearchLimits,
}

impl AppState {
    pub fn new(workspace_name: &str) -> Self {
        Self {
            workspace: WorkspaceStore::new(workspace_name),
            documents: DocumentSet::new(),
            search: SearchState::default(),
            navigator: Navigator::new(),
            limits: SearchLimits::default(),
        }
    }
}
