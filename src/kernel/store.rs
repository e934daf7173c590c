//! Central dispatch: applies an action to the state, reports whether
//! anything changed, and hands outward commands back to the host.

use tracing::{debug, warn};

use crate::kernel::action::Action;
use crate::kernel::effect::Effect;
use crate::kernel::error::ErrorKind;
use crate::kernel::navigate::CursorTarget;
use crate::kernel::state::AppState;
use crate::services::search;

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    pub error: Option<ErrorKind>,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            state_changed: true,
            ..Self::default()
        }
    }

    fn failed(error: ErrorKind) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(workspace_name: &str) -> Self {
        Self {
            state: AppState::new(workspace_name),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::CreateFile {
                parent,
                name,
                content,
            } => match self.state.workspace.create_file(parent, &name, &content) {
                Ok(_) => self.after_workspace_change(),
                Err(e) => DispatchResult::failed(e.into()),
            },
            Action::CreateFolder { parent, name } => {
                match self.state.workspace.create_folder(parent, &name) {
                    Ok(_) => DispatchResult::changed(),
                    Err(e) => DispatchResult::failed(e.into()),
                }
            }
            Action::DeleteEntry { id } => {
                let doomed = self.state.workspace.subtree_ids(id);
                match self.state.workspace.delete(id) {
                    Ok(()) => {
                        for gone in doomed {
                            self.state.documents.forget(gone);
                            self.state.navigator.forget_file(gone);
                        }
                        self.after_workspace_change()
                    }
                    Err(e) => DispatchResult::failed(e.into()),
                }
            }
            Action::RenameEntry { id, new_name } => {
                match self.state.workspace.rename(id, &new_name) {
                    Ok(()) => self.after_workspace_change(),
                    Err(e) => DispatchResult::failed(e.into()),
                }
            }
            Action::MoveEntry { id, new_parent } => {
                match self.state.workspace.move_to(id, new_parent) {
                    Ok(()) => DispatchResult::changed(),
                    Err(e) => DispatchResult::failed(e.into()),
                }
            }
            Action::UpdateContent { id, content } => {
                match self.state.workspace.update_content(id, content) {
                    Ok(()) => self.after_workspace_change(),
                    Err(e) => DispatchResult::failed(e.into()),
                }
            }
            Action::MarkSaved { id } => match self.state.workspace.mark_saved(id) {
                Ok(()) => DispatchResult::changed(),
                Err(e) => DispatchResult::failed(e.into()),
            },

            Action::OpenDocument { id } => {
                match self.state.documents.open(&self.state.workspace, id) {
                    Ok(changed) => DispatchResult {
                        state_changed: changed,
                        ..DispatchResult::default()
                    },
                    Err(e) => DispatchResult::failed(e.into()),
                }
            }
            Action::CloseDocument { id } => {
                if self.state.documents.close(id) {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::SetActiveDocument { id } => match self.state.documents.set_active(id) {
                Ok(changed) => DispatchResult {
                    state_changed: changed,
                    ..DispatchResult::default()
                },
                Err(e) => DispatchResult::failed(e.into()),
            },

            Action::SearchSetPattern { pattern } => {
                if !self.state.search.set_pattern(&pattern) {
                    return DispatchResult::unchanged();
                }
                self.rerun_search()
            }
            Action::SearchToggleRegex => {
                self.state.search.toggle_regex();
                self.rerun_search()
            }
            Action::SearchToggleCaseSensitive => {
                self.state.search.toggle_case_sensitive();
                self.rerun_search()
            }

            Action::RevealMatch(hit) => {
                let outcome = self.state.navigator.reveal_match(
                    &self.state.workspace,
                    &mut self.state.documents,
                    &hit,
                );
                Self::navigation_result(outcome)
            }
            Action::GoToLine { file_id, line } => {
                let outcome = self.state.navigator.go_to_line(
                    &self.state.workspace,
                    &mut self.state.documents,
                    file_id,
                    line,
                );
                Self::navigation_result(outcome)
            }
            Action::EditorRendered { file_id } => {
                match self.state.navigator.notify_rendered(file_id) {
                    Some(target) => DispatchResult {
                        effects: vec![Effect::PlaceCursor(target)],
                        state_changed: true,
                        error: None,
                    },
                    None => DispatchResult::unchanged(),
                }
            }
        }
    }

    /// Tree or content changed: displayed search results may be stale.
    fn after_workspace_change(&mut self) -> DispatchResult {
        if self.state.search.query().pattern.trim().is_empty() {
            return DispatchResult::changed();
        }
        let mut result = self.rerun_search();
        result.state_changed = true;
        result
    }

    fn rerun_search(&mut self) -> DispatchResult {
        if self.state.search.query().pattern.trim().is_empty() {
            self.state.search.clear_results();
            return DispatchResult::changed();
        }

        match search::search(
            &self.state.workspace,
            self.state.search.query(),
            self.state.limits,
        ) {
            Ok(outcome) => {
                debug!(
                    matches = outcome.matches.len(),
                    truncated = outcome.truncated,
                    "search completed"
                );
                self.state.search.apply_outcome(outcome);
                DispatchResult::changed()
            }
            Err(err) => {
                warn!(%err, "search query rejected");
                let kind: ErrorKind = err.into();
                self.state.search.set_error(kind.to_string());
                DispatchResult {
                    state_changed: true,
                    error: Some(kind),
                    ..DispatchResult::default()
                }
            }
        }
    }

    fn navigation_result(
        outcome: Result<Option<CursorTarget>, ErrorKind>,
    ) -> DispatchResult {
        match outcome {
            Ok(Some(target)) => DispatchResult {
                effects: vec![Effect::PlaceCursor(target)],
                state_changed: true,
                error: None,
            },
            Ok(None) => DispatchResult::changed(),
            Err(e) => DispatchResult::failed(e),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
