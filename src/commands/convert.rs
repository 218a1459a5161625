//! # convert 命令实现
//!
//! 递归扫描目录，用 pandoc 把 Markdown 批量转换为独立 HTML。
//!
//! ## 功能
//! - 校验输入目录与 pandoc 路径
//! - pandoc 预检，不可用时拒绝整个批次
//! - 按输入目录结构在输出目录生成 HTML
//! - 汇总成功/失败数量，`--fail-on-error` 时失败即非零退出
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `converter/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::{Batch, BatchResult};
use crate::cli::convert::ConvertArgs;
use crate::converter::Pandoc;
use crate::error::{PandocBatchError, Result};
use crate::models::ConverterConfig;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 失败明细行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Markdown -> HTML (pandoc)");

    let output_root = args.output_root();
    let config = ConverterConfig::new(
        args.pandoc_path(),
        &args.input_directory,
        output_root.as_deref(),
    )?;

    let pandoc = Pandoc::new(&config);
    let result = Batch::new(&config, &pandoc).quiet(args.quiet).run()?;

    if result.total() > 0 {
        print_summary(&result);
    }

    apply_exit_policy(&result, args.fail_on_error)
}

/// 打印转换统计
fn print_summary(result: &BatchResult) {
    output::print_separator();
    output::print_done("Conversion finished");
    output::print_count("Succeeded:", result.success, false);
    output::print_count("Failed:", result.failed, true);

    if !result.failures.is_empty() {
        let rows: Vec<FailureRow> = result
            .failures
            .iter()
            .map(|(file, error)| FailureRow {
                file: file.clone(),
                error: error.clone(),
            })
            .collect();
        println!("\n{}", Table::new(&rows));
    }
}

/// 批次执行完成后的退出策略
///
/// 默认只要批次跑完就视为成功；`fail_on_error` 时任何失败文件都返回错误。
fn apply_exit_policy(result: &BatchResult, fail_on_error: bool) -> Result<()> {
    if fail_on_error && !result.is_clean() {
        return Err(PandocBatchError::FailedConversions {
            failed: result.failed,
        });
    }
    Ok(())
}
