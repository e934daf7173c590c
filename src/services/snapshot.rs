//! 工作区快照：整树 + 标签页状态的 JSON 持久化
//!
//! 恢复时做消毒：反序列化保证不了的引用一致性在这里补齐

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::models::{DocumentSet, WorkspaceStore};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub version: u32,
    pub workspace: WorkspaceStore,
    pub documents: DocumentSet,
}

impl WorkspaceSnapshot {
    pub fn capture(workspace: &WorkspaceStore, documents: &DocumentSet) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            workspace: workspace.clone(),
            documents: documents.clone(),
        }
    }

    /// 拆回两份状态；打开列表里不再指向文件的 id 会被丢弃
    pub fn restore(self) -> (WorkspaceStore, DocumentSet) {
        let WorkspaceSnapshot {
            workspace,
            mut documents,
            ..
        } = self;
        documents.retain_valid(&workspace);
        (workspace, documents)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let snapshot: WorkspaceSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(serde::de::Error::custom(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }

    pub fn save_to_path(&self, path: &Path) -> io::Result<()> {
        let json = self
            .to_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    pub fn load_from_path(path: &Path) -> io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
