//! # 单文件转换任务
//!
//! 将发现的 Markdown 文件与其 HTML 输出路径配对。
//!
//! ## 路径推导
//! - 扩展名替换为 `.html`
//! - 输出根目录不同于输入根目录时，按路径前缀（而非子串）重写
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `converter/` 使用
//! - 使用 `models/config.rs`

use super::{has_markdown_suffix, ConverterConfig, HTML_EXTENSION, MARKDOWN_SUFFIX};
use crate::error::{PandocBatchError, Result};

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// 一个待转换的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// 源 Markdown 文件
    pub input: PathBuf,
    /// 目标 HTML 文件
    pub output: PathBuf,
}

impl ConversionJob {
    /// 根据配置推导输出路径
    pub fn resolve(input: PathBuf, config: &ConverterConfig) -> Self {
        let output = derive_output_path(&input, &config.input_root, &config.output_root);
        Self { input, output }
    }

    /// 创建输出文件的父目录（已存在时直接成功）
    pub fn prepare(&self) -> Result<()> {
        match self.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| PandocBatchError::OutputDirectoryError {
                    path: parent.display().to_string(),
                    source: e,
                })
            }
            _ => Ok(()),
        }
    }
}

/// 推导 HTML 输出路径
///
/// `input_root` 之外的文件保留原目录，只替换扩展名。
pub fn derive_output_path(input: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let html = html_path(input);
    if output_root == input_root {
        return html;
    }

    match html.strip_prefix(input_root) {
        Ok(relative) => output_root.join(relative),
        Err(_) => html,
    }
}

/// 把文件名末尾的 `.md` 换成 `.html`（`.md` -> `.html`）
fn html_path(input: &Path) -> PathBuf {
    let stem = input
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| has_markdown_suffix(OsStr::new(name)))
        .map(|name| &name[..name.len() - MARKDOWN_SUFFIX.len()]);

    match stem {
        Some(stem) => input.with_file_name(format!("{}.{}", stem, HTML_EXTENSION)),
        None => input.with_extension(HTML_EXTENSION),
    }
}
