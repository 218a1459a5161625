//! # 数据模型模块
//!
//! 定义转换配置与单文件转换任务。
//!
//! ## 依赖关系
//! - 被 `batch/`、`converter/` 和 `commands/` 使用
//! - 子模块: config, job

pub mod config;
pub mod job;

pub use config::ConverterConfig;
pub use job::ConversionJob;

use std::ffi::OsStr;

/// Markdown 源文件名后缀（大小写不敏感匹配）
pub const MARKDOWN_SUFFIX: &str = ".md";

/// HTML 输出文件扩展名
pub const HTML_EXTENSION: &str = "html";

/// 文件名是否以 `.md` 结尾（大小写不敏感，`.md` 本身也算）
pub fn has_markdown_suffix(name: &OsStr) -> bool {
    let name = name.as_encoded_bytes();
    let suffix = MARKDOWN_SUFFIX.as_bytes();
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_markdown_suffix() {
        for name in ["readme.md", "notes.MD", "deep.Md", ".md", ".MD", "a.b.md"] {
            assert!(has_markdown_suffix(OsStr::new(name)), "{name}");
        }
        for name in ["md", "notmd", "x.markdown", "archive.md.bak", "image.png", ""] {
            assert!(!has_markdown_suffix(OsStr::new(name)), "{name}");
        }
    }
}
