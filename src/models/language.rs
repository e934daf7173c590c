use serde::{Deserialize, Serialize};

/// 文件语言标签，仅供外部渲染层做高亮/图标映射
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageId {
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    Json,
    Markdown,
    Css,
    Html,
    Xml,
    Java,
    C,
    Cpp,
    Shell,
    Sql,
    Yaml,
    Toml,
    Text,
}

impl LanguageId {
    /// 根据文件名推断语言（取最后一个扩展名，未知时回退 Text）
    pub fn from_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext,
            _ => return Self::Text,
        };

        match ext.to_ascii_lowercase().as_str() {
            "rs" => Self::Rust,
            "go" => Self::Go,
            "py" | "pyi" => Self::Python,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Self::TypeScript,
            "json" => Self::Json,
            "md" | "markdown" => Self::Markdown,
            "css" | "scss" | "sass" | "less" => Self::Css,
            "html" | "htm" => Self::Html,
            "xml" | "svg" => Self::Xml,
            "java" => Self::Java,
            "c" | "h" => Self::C,
            "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => Self::Cpp,
            "sh" | "bash" | "zsh" | "fish" => Self::Shell,
            "sql" => Self::Sql,
            "yaml" | "yml" => Self::Yaml,
            "toml" => Self::Toml,
            _ => Self::Text,
        }
    }

    /// 外部编辑器部件使用的语言标识字符串
    pub fn tag(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Css => "css",
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Shell => "shell",
            Self::Sql => "sql",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Text => "text",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/language.rs"]
mod tests;
