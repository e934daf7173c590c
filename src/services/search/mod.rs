//! 搜索服务

pub mod engine;

pub use engine::{
    search, SearchError, SearchLimits, SearchMatch, SearchOutcome, SearchQuery,
    DEFAULT_MAX_MATCHES,
};
