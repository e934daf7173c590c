//! 打开文档注册表：标签页顺序、活动文档与最近文件
//!
//! 只持有 id，条目本体归 WorkspaceStore 所有；
//! 删除条目时由上层调用 forget 做联动收尾

use serde::{Deserialize, Serialize};
use std::fmt;

use super::workspace::{EntryId, WorkspaceStore};

/// 最近文件列表上限
pub const RECENT_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentsError {
    NotFound,
    NotOpen,
}

impl fmt::Display for DocumentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentsError::NotFound => write!(f, "entry is not an existing file"),
            DocumentsError::NotOpen => write!(f, "document is not open"),
        }
    }
}

impl std::error::Error for DocumentsError {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSet {
    open_ids: Vec<EntryId>,
    active_id: Option<EntryId>,
    recent: Vec<EntryId>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_ids(&self) -> &[EntryId] {
        &self.open_ids
    }

    pub fn active_id(&self) -> Option<EntryId> {
        self.active_id
    }

    pub fn recent(&self) -> &[EntryId] {
        &self.recent
    }

    pub fn is_open(&self, id: EntryId) -> bool {
        self.open_ids.contains(&id)
    }

    /// 打开文件：已打开仅切换焦点，否则追加到标签尾部并激活。
    /// 返回状态是否变化
    pub fn open(&mut self, store: &WorkspaceStore, id: EntryId) -> Result<bool, DocumentsError> {
        let is_file = store.entry(id).is_some_and(|e| e.is_file());
        if !is_file {
            return Err(DocumentsError::NotFound);
        }

        if self.is_open(id) {
            let refocused = self.active_id != Some(id);
            self.active_id = Some(id);
            self.push_recent(id);
            return Ok(refocused);
        }

        self.open_ids.push(id);
        self.active_id = Some(id);
        self.push_recent(id);
        Ok(true)
    }

    /// 关闭标签（幂等）。关闭活动文档时焦点移到前一个标签，
    /// 没有前一个则取剩余首个
    pub fn close(&mut self, id: EntryId) -> bool {
        let Some(idx) = self.open_ids.iter().position(|&open| open == id) else {
            return false;
        };
        self.open_ids.remove(idx);

        if self.active_id == Some(id) {
            self.active_id = if idx > 0 {
                Some(self.open_ids[idx - 1])
            } else {
                self.open_ids.first().copied()
            };
        }
        true
    }

    pub fn set_active(&mut self, id: EntryId) -> Result<bool, DocumentsError> {
        if !self.is_open(id) {
            return Err(DocumentsError::NotOpen);
        }
        let changed = self.active_id != Some(id);
        self.active_id = Some(id);
        if changed {
            self.push_recent(id);
        }
        Ok(changed)
    }

    /// 条目从工作区消失后的收尾：关掉标签并清出最近列表
    pub fn forget(&mut self, id: EntryId) -> bool {
        let closed = self.close(id);
        let before = self.recent.len();
        self.recent.retain(|&r| r != id);
        closed || self.recent.len() != before
    }

    /// 快照恢复后的消毒：丢掉不再指向文件的 id
    pub fn retain_valid(&mut self, store: &WorkspaceStore) {
        let is_file = |id: &EntryId| store.entry(*id).is_some_and(|e| e.is_file());
        self.open_ids.retain(is_file);
        self.recent.retain(is_file);

        match self.active_id {
            Some(active) if self.is_open(active) => {}
            _ => self.active_id = self.open_ids.first().copied(),
        }
    }

    fn push_recent(&mut self, id: EntryId) {
        self.recent.retain(|&r| r != id);
        self.recent.insert(0, id);
        self.recent.truncate(RECENT_LIMIT);
    }

    #[cfg(test)]
    pub fn assert_invariants(&self) {
        let mut seen = std::collections::HashSet::new();
        for &id in &self.open_ids {
            assert!(seen.insert(id), "duplicate open tab");
        }
        if let Some(active) = self.active_id {
            assert!(self.open_ids.contains(&active), "active not open");
        }
        assert!(self.recent.len() <= RECENT_LIMIT);
    }
}
