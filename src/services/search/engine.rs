//! 工作区搜索引擎
//!
//! 对 WorkspaceStore 的纯函数查询：逐文件逐行匹配，
//! 命中定位到 1 基行号与 UTF-16 列号，全局上限截断

use compact_str::CompactString;
use memchr::memmem;
use regex::RegexBuilder;
use std::fmt;

use crate::models::{EntryId, WorkspaceStore};

/// 全局命中数上限默认值
pub const DEFAULT_MAX_MATCHES: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub pattern: String,
    pub is_regex: bool,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_matches: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_matches: DEFAULT_MAX_MATCHES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub file_id: EntryId,
    pub file_name: CompactString,
    /// 1 基行号
    pub line_number: usize,
    /// 1 基列号，按行前缀的 UTF-16 码元计
    pub column: usize,
    pub line_text: String,
    pub match_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub matches: Vec<SearchMatch>,
    pub truncated: bool,
}

#[derive(Debug, Clone)]
pub enum SearchError {
    InvalidPattern(regex::Error),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidPattern(err) => write!(f, "invalid pattern: {err}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// 编译后的匹配计划：区分大小写的字面量走 memmem，
/// 其余（不区分大小写字面量、正则）统一走 regex
enum Plan {
    Literal(memmem::Finder<'static>),
    Regex(regex::Regex),
}

impl Plan {
    fn compile(pattern: &str, is_regex: bool, case_sensitive: bool) -> Result<Self, SearchError> {
        if !is_regex && case_sensitive {
            return Ok(Plan::Literal(memmem::Finder::new(pattern).into_owned()));
        }
        let source = if is_regex {
            pattern.to_string()
        } else {
            regex::escape(pattern)
        };
        let regex = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(SearchError::InvalidPattern)?;
        Ok(Plan::Regex(regex))
    }

    /// 一行内的全部非重叠命中，返回字节区间
    fn find_in_line(&self, line: &str, out: &mut Vec<(usize, usize)>) {
        out.clear();
        match self {
            Plan::Literal(finder) => {
                let needle_len = finder.needle().len();
                for start in finder.find_iter(line.as_bytes()) {
                    out.push((start, start + needle_len));
                }
            }
            Plan::Regex(regex) => {
                for m in regex.find_iter(line) {
                    out.push((m.start(), m.end()));
                }
            }
        }
    }
}

/// 行前缀的 UTF-16 码元数 + 1，即外部编辑器部件的列号
fn utf16_column(line: &str, byte_start: usize) -> usize {
    line[..byte_start].encode_utf16().count() + 1
}

pub(crate) fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

/// 在整个工作区执行一次搜索。模式先做 trim，空模式直接返回空结果
pub fn search(
    store: &WorkspaceStore,
    query: &SearchQuery,
    limits: SearchLimits,
) -> Result<SearchOutcome, SearchError> {
    let pattern = query.pattern.trim();
    if pattern.is_empty() {
        return Ok(SearchOutcome::default());
    }

    let plan = Plan::compile(pattern, query.is_regex, query.case_sensitive)?;

    // 按 (文件名, 路径) 排序，保证截断与分组顺序确定
    let mut files: Vec<(&str, &str, EntryId, &str)> = store
        .entries()
        .filter_map(|(id, entry)| {
            entry
                .content
                .as_deref()
                .map(|content| (entry.name.as_str(), entry.path.as_str(), id, content))
        })
        .collect();
    files.sort_by_key(|&(name, path, _, _)| (name, path));

    let mut outcome = SearchOutcome::default();
    let mut spans = Vec::new();

    'files: for (file_name, _, file_id, content) in files {
        for (line_idx, raw_line) in content.split('\n').enumerate() {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            plan.find_in_line(line, &mut spans);
            for &(start, end) in &spans {
                if outcome.matches.len() == limits.max_matches {
                    outcome.truncated = true;
                    break 'files;
                }
                outcome.matches.push(SearchMatch {
                    file_id,
                    file_name: CompactString::from(file_name),
                    line_number: line_idx + 1,
                    column: utf16_column(line, start),
                    line_text: line.to_string(),
                    match_text: line[start..end].to_string(),
                });
            }
        }
    }

    Ok(outcome)
}
