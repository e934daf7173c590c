//! tabula - 工作区编辑核心库
//!
//! 模块结构：
//! - models: 数据模型（WorkspaceStore, DocumentSet, LanguageId）
//! - services: 服务层（搜索引擎、快照）
//! - kernel: 无界面内核（AppState, Action, Effect, Store）
//! - logging: tracing 初始化

pub mod kernel;
pub mod logging;
pub mod models;
pub mod services;
