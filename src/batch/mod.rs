//! # 批量处理模块
//!
//! 发现 Markdown 文件、逐个调用转换器并汇总结果。
//!
//! ## 功能
//! - 递归收集匹配文件
//! - 顺序处理，单文件失败不影响批次
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod orchestrator;
pub mod runner;

pub use orchestrator::Batch;
pub use runner::BatchResult;
