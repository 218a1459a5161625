//! # 统一错误处理模块
//!
//! 定义 pandoc-batch 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 配置错误：输入目录或 pandoc 可执行文件不存在，立即终止
//! - 工具可用性错误：pandoc 预检失败，拒绝整个批次
//! - 单文件错误：输出目录创建失败或 pandoc 转换失败，记录后继续
//! - 扫描错误：子目录无法读取，记录后继续
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// pandoc-batch 统一错误类型
#[derive(Error, Debug)]
pub enum PandocBatchError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Input directory not found: {path}")]
    InputDirectoryNotFound { path: String },

    #[error("Pandoc executable not found: {path}")]
    ConverterNotFound { path: String },

    #[error("Failed to resolve path {path}: {source}")]
    PathResolveError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 工具可用性错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unable to run pandoc, check the configured path\ncmd: {command}\nReason: {reason}")]
    ConverterUnavailable { command: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 单文件错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create output directory {path}: {source}")]
    OutputDirectoryError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{reason} (cmd: {command})")]
    ConversionFailed { command: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 扫描错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to scan {path}: {reason}")]
    DiscoveryError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 退出策略
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} file(s) failed to convert")]
    FailedConversions { failed: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PandocBatchError>;
