//! # 批量编排
//!
//! 一次批量转换的完整流程：
//! `Idle -> CheckingTool -> Scanning -> Converting -> Done`
//!
//! - 预检失败时进入 `Done(Refused)`，不处理任何文件
//! - 未找到 Markdown 文件时直接 `Done(Completed)`
//! - 进入 `Converting` 后总会完成，单文件失败只体现在统计中
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/runner.rs`, `converter/`

use super::collector::FileCollector;
use super::runner::{BatchResult, BatchRunner};
use crate::converter::Converter;
use crate::error::Result;
use crate::models::{ConversionJob, ConverterConfig};
use crate::utils::output;

/// 批次状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    CheckingTool,
    Scanning,
    Converting,
    Done(Completion),
}

/// 批次结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// 批次执行完毕（不代表没有失败文件）
    Completed,
    /// 转换器不可用，批次被拒绝
    Refused,
}

/// 一次批量转换
pub struct Batch<'a, C: Converter> {
    config: &'a ConverterConfig,
    converter: &'a C,
    state: BatchState,
    quiet: bool,
}

impl<'a, C: Converter> Batch<'a, C> {
    pub fn new(config: &'a ConverterConfig, converter: &'a C) -> Self {
        Self {
            config,
            converter,
            state: BatchState::Idle,
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// 执行批次
    ///
    /// 只有转换器预检失败会返回错误。
    pub fn run(&mut self) -> Result<BatchResult> {
        self.state = BatchState::CheckingTool;
        match self.converter.probe() {
            Ok(version) => output::print_info(&format!("Using {}", version)),
            Err(e) => {
                self.state = BatchState::Done(Completion::Refused);
                return Err(e);
            }
        }

        self.state = BatchState::Scanning;
        output::print_info(&format!(
            "Scanning directory: {}",
            self.config.input_root.display()
        ));

        let discovery = FileCollector::new(self.config.input_root.clone()).collect();
        for err in &discovery.errors {
            output::print_warning(&err.to_string());
        }

        if discovery.files.is_empty() {
            output::print_warning("No Markdown files found");
            self.state = BatchState::Done(Completion::Completed);
            return Ok(BatchResult::default());
        }

        let jobs: Vec<ConversionJob> = discovery
            .files
            .into_iter()
            .map(|input| ConversionJob::resolve(input, self.config))
            .collect();

        output::print_info(&format!(
            "Found {} Markdown file(s), writing HTML to {}",
            jobs.len(),
            self.config.output_root.display()
        ));
        output::print_separator();

        self.state = BatchState::Converting;
        let result = BatchRunner::new(self.converter).quiet(self.quiet).run(jobs);

        self.state = BatchState::Done(Completion::Completed);
        Ok(result)
    }
}
