//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! 单一命令：`pandoc-batch <INPUT_DIRECTORY> [--pandoc PATH] [--output_directory PATH]`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::Parser;

/// pandoc-batch - 批量 Markdown -> HTML 转换
#[derive(Parser, Debug)]
#[command(name = "pandoc-batch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Recursively convert Markdown files to standalone HTML with pandoc",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,
}
