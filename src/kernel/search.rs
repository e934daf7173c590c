//! Search view-state: the query being edited and the grouped results
//! the panel renders.

use compact_str::CompactString;

use crate::models::EntryId;
use crate::services::search::{SearchMatch, SearchOutcome, SearchQuery};

/// Matches of one file, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatchGroup {
    pub file_id: EntryId,
    pub file_name: CompactString,
    pub matches: Vec<SearchMatch>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: SearchQuery,
    groups: Vec<FileMatchGroup>,
    total_matches: usize,
    truncated: bool,
    last_error: Option<String>,
}

impl SearchState {
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn groups(&self) -> &[FileMatchGroup] {
        &self.groups
    }

    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns whether the pattern actually changed.
    pub fn set_pattern(&mut self, pattern: &str) -> bool {
        if self.query.pattern == pattern {
            return false;
        }
        self.query.pattern = pattern.to_string();
        true
    }

    pub fn toggle_regex(&mut self) {
        self.query.is_regex = !self.query.is_regex;
    }

    pub fn toggle_case_sensitive(&mut self) {
        self.query.case_sensitive = !self.query.case_sensitive;
    }

    /// Replace the displayed results with a fresh engine outcome.
    pub fn apply_outcome(&mut self, outcome: SearchOutcome) {
        self.total_matches = outcome.matches.len();
        self.truncated = outcome.truncated;
        self.last_error = None;
        self.groups = group_by_file(outcome.matches);
    }

    /// Record a failed query. The previous results stay on screen until
    /// the query changes to something valid or empty.
    pub fn set_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn clear_results(&mut self) {
        self.groups.clear();
        self.total_matches = 0;
        self.truncated = false;
        self.last_error = None;
    }
}

fn group_by_file(matches: Vec<SearchMatch>) -> Vec<FileMatchGroup> {
    let mut groups: Vec<FileMatchGroup> = Vec::new();
    for hit in matches {
        match groups.last_mut() {
            Some(group) if group.file_id == hit.file_id => group.matches.push(hit),
            _ => groups.push(FileMatchGroup {
                file_id: hit.file_id,
                file_name: hit.file_name.clone(),
                matches: vec![hit],
            }),
        }
    }
    groups
}
