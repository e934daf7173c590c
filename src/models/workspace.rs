//! 工作区文件表数据模型
//!
//! 扁平 arena 存储 + 反规范化路径：每个条目记录完整路径，
//! 重命名/移动时沿子树重算，保证父子双向一致

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::time::SystemTime;

use super::language::LanguageId;

new_key_type! { pub struct EntryId; }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Folder,
}

/// 文件表操作错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceError {
    InvalidParent,
    NotFound,
    NotAFile,
    InvalidName,
    CannotDeleteRoot,
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::InvalidParent => write!(f, "parent is not an existing folder"),
            WorkspaceError::NotFound => write!(f, "entry not found"),
            WorkspaceError::NotAFile => write!(f, "entry is not a file"),
            WorkspaceError::InvalidName => write!(f, "name is empty or contains a path separator"),
            WorkspaceError::CannotDeleteRoot => write!(f, "cannot delete the workspace root"),
        }
    }
}

impl std::error::Error for WorkspaceError {}

/// 工作区树节点：文件持有 content/language，文件夹持有 children
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: CompactString,
    pub path: String,
    pub kind: EntryKind,
    pub parent: Option<EntryId>,
    pub children: Option<Vec<EntryId>>,
    pub content: Option<String>,
    pub language: Option<LanguageId>,
    pub is_dirty: bool,
    pub last_modified: SystemTime,
}

impl FileEntry {
    fn new_file(name: CompactString, path: String, parent: EntryId, content: String) -> Self {
        let language = LanguageId::from_name(&name);
        Self {
            name,
            path,
            kind: EntryKind::File,
            parent: Some(parent),
            children: None,
            content: Some(content),
            language: Some(language),
            is_dirty: true,
            last_modified: SystemTime::now(),
        }
    }

    fn new_folder(name: CompactString, path: String, parent: Option<EntryId>) -> Self {
        Self {
            name,
            path,
            kind: EntryKind::Folder,
            parent,
            children: Some(Vec::new()),
            content: None,
            language: None,
            is_dirty: false,
            last_modified: SystemTime::now(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

fn join_path(parent_path: &str, name: &str) -> String {
    if parent_path == "/" {
        format!("/{name}")
    } else {
        format!("{parent_path}/{name}")
    }
}

fn validate_name(name: &str) -> Result<(), WorkspaceError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(WorkspaceError::InvalidName);
    }
    Ok(())
}

/// 工作区文件表：以根文件夹为锚的有根无环树
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceStore {
    arena: SlotMap<EntryId, FileEntry>,
    root: EntryId,
}

impl WorkspaceStore {
    pub fn new(root_name: &str) -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(FileEntry::new_folder(
            CompactString::from(root_name),
            "/".to_string(),
            None,
        ));
        Self { arena, root }
    }

    pub fn root(&self) -> EntryId {
        self.root
    }

    pub fn entry(&self, id: EntryId) -> Option<&FileEntry> {
        self.arena.get(id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// 全表只读迭代，供 UI 层和搜索引擎做快照
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &FileEntry)> {
        self.arena.iter()
    }

    pub fn create_file(
        &mut self,
        parent: EntryId,
        name: &str,
        content: &str,
    ) -> Result<EntryId, WorkspaceError> {
        validate_name(name)?;
        let path = {
            let parent_entry = self.arena.get(parent).ok_or(WorkspaceError::InvalidParent)?;
            if !parent_entry.is_folder() {
                return Err(WorkspaceError::InvalidParent);
            }
            join_path(&parent_entry.path, name)
        };

        let id = self.arena.insert(FileEntry::new_file(
            CompactString::from(name),
            path,
            parent,
            content.to_string(),
        ));
        self.attach_child(parent, id);
        Ok(id)
    }

    pub fn create_folder(&mut self, parent: EntryId, name: &str) -> Result<EntryId, WorkspaceError> {
        validate_name(name)?;
        let path = {
            let parent_entry = self.arena.get(parent).ok_or(WorkspaceError::InvalidParent)?;
            if !parent_entry.is_folder() {
                return Err(WorkspaceError::InvalidParent);
            }
            join_path(&parent_entry.path, name)
        };

        let id = self.arena.insert(FileEntry::new_folder(
            CompactString::from(name),
            path,
            Some(parent),
        ));
        self.attach_child(parent, id);
        Ok(id)
    }

    pub fn delete(&mut self, id: EntryId) -> Result<(), WorkspaceError> {
        if id == self.root {
            return Err(WorkspaceError::CannotDeleteRoot);
        }
        let parent = self.arena.get(id).ok_or(WorkspaceError::NotFound)?.parent;

        if let Some(parent_id) = parent {
            if let Some(children) = self
                .arena
                .get_mut(parent_id)
                .and_then(|e| e.children.as_mut())
            {
                children.retain(|&child| child != id);
            }
        }

        self.recursive_remove(id);
        Ok(())
    }

    pub fn rename(&mut self, id: EntryId, new_name: &str) -> Result<(), WorkspaceError> {
        validate_name(new_name)?;
        {
            let entry = self.arena.get(id).ok_or(WorkspaceError::NotFound)?;
            if entry.name == new_name {
                return Ok(());
            }
        }

        if let Some(entry) = self.arena.get_mut(id) {
            entry.name = CompactString::from(new_name);
            if entry.is_file() {
                entry.language = Some(LanguageId::from_name(new_name));
            }
            entry.last_modified = SystemTime::now();
        }

        self.recompute_paths(id);
        Ok(())
    }

    pub fn move_to(&mut self, id: EntryId, new_parent: EntryId) -> Result<(), WorkspaceError> {
        let old_parent = self.arena.get(id).ok_or(WorkspaceError::NotFound)?.parent;

        // 目标必须是文件夹，且不能把节点挂进自己的子树
        let parent_ok = self
            .arena
            .get(new_parent)
            .is_some_and(|e| e.is_folder());
        if !parent_ok || new_parent == id || self.is_ancestor(id, new_parent) {
            return Err(WorkspaceError::InvalidParent);
        }

        if old_parent == Some(new_parent) {
            return Ok(());
        }

        if let Some(old_parent_id) = old_parent {
            if let Some(children) = self
                .arena
                .get_mut(old_parent_id)
                .and_then(|e| e.children.as_mut())
            {
                children.retain(|&child| child != id);
            }
        }

        self.attach_child(new_parent, id);
        if let Some(entry) = self.arena.get_mut(id) {
            entry.parent = Some(new_parent);
            entry.last_modified = SystemTime::now();
        }

        self.recompute_paths(id);
        Ok(())
    }

    pub fn update_content(&mut self, id: EntryId, content: String) -> Result<(), WorkspaceError> {
        let entry = self.arena.get_mut(id).ok_or(WorkspaceError::NotFound)?;
        if !entry.is_file() {
            return Err(WorkspaceError::NotAFile);
        }
        entry.content = Some(content);
        entry.is_dirty = true;
        entry.last_modified = SystemTime::now();
        Ok(())
    }

    /// 外部保存完成的回执：清除脏标记
    pub fn mark_saved(&mut self, id: EntryId) -> Result<(), WorkspaceError> {
        let entry = self.arena.get_mut(id).ok_or(WorkspaceError::NotFound)?;
        if !entry.is_file() {
            return Err(WorkspaceError::NotAFile);
        }
        entry.is_dirty = false;
        Ok(())
    }

    pub fn dirty_files(&self) -> Vec<EntryId> {
        self.arena
            .iter()
            .filter(|(_, e)| e.is_file() && e.is_dirty)
            .map(|(id, _)| id)
            .collect()
    }

    /// 按完整路径查找条目（同名兄弟取先插入者）
    pub fn find_by_path(&self, path: &str) -> Option<EntryId> {
        if path == "/" {
            return Some(self.root);
        }

        let mut current = self.root;
        for component in path.trim_start_matches('/').split('/') {
            let children = self.arena.get(current)?.children.as_ref()?;
            current = children
                .iter()
                .copied()
                .find(|&child| self.arena.get(child).is_some_and(|e| e.name == component))?;
        }
        Some(current)
    }

    /// 节点及其全部后代（先序），供删除时联动收尾
    pub fn subtree_ids(&self, id: EntryId) -> Vec<EntryId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(entry) = self.arena.get(cur) {
                result.push(cur);
                if let Some(children) = &entry.children {
                    stack.extend(children.iter().copied());
                }
            }
        }
        result
    }

    fn attach_child(&mut self, parent: EntryId, id: EntryId) {
        if let Some(children) = self.arena.get_mut(parent).and_then(|e| e.children.as_mut()) {
            children.push(id);
        }
    }

    fn is_ancestor(&self, ancestor: EntryId, mut descendant: EntryId) -> bool {
        while let Some(entry) = self.arena.get(descendant) {
            match entry.parent {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => descendant = parent,
                None => break,
            }
        }
        false
    }

    fn recursive_remove(&mut self, id: EntryId) {
        if let Some(entry) = self.arena.get(id) {
            if let Some(children) = entry.children.clone() {
                for child in children {
                    self.recursive_remove(child);
                }
            }
            self.arena.remove(id);
        }
    }

    /// 重算节点及其子树的反规范化路径
    fn recompute_paths(&mut self, id: EntryId) {
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let new_path = {
                let Some(entry) = self.arena.get(cur) else {
                    continue;
                };
                match entry.parent.and_then(|p| self.arena.get(p)) {
                    Some(parent) => join_path(&parent.path, &entry.name),
                    None => "/".to_string(),
                }
            };
            if let Some(entry) = self.arena.get_mut(cur) {
                entry.path = new_path;
                if let Some(children) = &entry.children {
                    stack.extend(children.iter().copied());
                }
            }
        }
    }

    #[cfg(test)]
    pub fn assert_invariants(&self) {
        let root = self.arena.get(self.root).expect("root missing");
        assert!(root.parent.is_none());
        assert_eq!(root.path, "/");

        for (id, entry) in self.arena.iter() {
            match entry.kind {
                EntryKind::File => {
                    assert!(entry.children.is_none());
                    assert!(entry.content.is_some());
                }
                EntryKind::Folder => {
                    assert!(entry.children.is_some());
                    assert!(entry.content.is_none());
                }
            }

            // 父链必须在有限步内到根且无环
            if id != self.root {
                let mut current = id;
                let mut steps = 0usize;
                loop {
                    let parent = self
                        .arena
                        .get(current)
                        .and_then(|e| e.parent)
                        .expect("dangling parent link");
                    let parent_entry = self.arena.get(parent).expect("parent not in arena");
                    assert!(
                        parent_entry
                            .children
                            .as_ref()
                            .is_some_and(|c| c.contains(&current)),
                        "parent does not list child"
                    );
                    if parent == self.root {
                        break;
                    }
                    current = parent;
                    steps += 1;
                    assert!(steps <= self.arena.len(), "cycle in parent chain");
                }

                let parent = entry.parent.expect("non-root without parent");
                let parent_path = &self.arena.get(parent).expect("parent missing").path;
                assert_eq!(entry.path, join_path(parent_path, &entry.name));
            }

            if let Some(children) = &entry.children {
                for &child in children {
                    let child_entry = self.arena.get(child).expect("dangling child id");
                    assert_eq!(child_entry.parent, Some(id));
                }
            }
        }
    }
}
