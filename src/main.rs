//! # pandoc-batch - Markdown 目录批量转换工具
//!
//! 递归扫描目录中的 Markdown 文件，调用 pandoc 生成独立、自包含的 HTML，
//! 并在输出目录中保持源目录结构。
//!
//! ## 退出码
//! - `0`：批次执行完毕（默认不论单个文件是否失败）
//! - `1`：输入目录或 pandoc 不存在、pandoc 预检失败，
//!   或在 `--fail-on-error` 下存在失败文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集、顺序执行、状态流转)
//!   │     ├── converter/ (pandoc 调用)
//!   │     └── models/    (配置与任务)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod converter;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
