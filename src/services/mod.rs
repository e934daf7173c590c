//! 服务层模块

pub mod search;
pub mod snapshot;

pub use snapshot::WorkspaceSnapshot;
