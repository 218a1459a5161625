//! # 批量执行器
//!
//! 顺序执行转换任务并统计结果。
//!
//! ## 功能
//! - 逐个创建输出目录并调用转换器
//! - 单个文件失败只记录，不中断批次
//! - 进度条显示，逐文件结果通过 `suspend` 打印
//!
//! ## 依赖关系
//! - 被 `batch/orchestrator.rs` 调用
//! - 使用 `converter::Converter` 执行转换
//! - 使用 `utils/progress.rs`, `utils/output.rs`

use crate::converter::Converter;
use crate::error::PandocBatchError;
use crate::models::ConversionJob;
use crate::utils::{output, progress};

/// 单个文件处理结果
#[derive(Debug)]
pub enum ProcessResult {
    /// 转换成功
    Success(ConversionJob),
    /// 转换失败
    Failed(ConversionJob, PandocBatchError),
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情 (文件路径, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Failed(job, err) => {
                self.failed += 1;
                self.failures
                    .push((job.input.display().to_string(), err.to_string()));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 是否全部成功
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// 批量执行器
pub struct BatchRunner<'a, C: Converter> {
    converter: &'a C,
    /// 不打印逐文件成功信息
    quiet: bool,
}

impl<'a, C: Converter> BatchRunner<'a, C> {
    /// 创建新的批量执行器
    pub fn new(converter: &'a C) -> Self {
        Self {
            converter,
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// 处理单个任务
    pub fn process(&self, job: ConversionJob) -> ProcessResult {
        let outcome = job.prepare().and_then(|()| self.converter.convert(&job));
        match outcome {
            Ok(()) => ProcessResult::Success(job),
            Err(e) => ProcessResult::Failed(job, e),
        }
    }

    /// 顺序处理任务列表
    pub fn run(&self, jobs: Vec<ConversionJob>) -> BatchResult {
        let pb = progress::create_progress_bar(jobs.len() as u64, "Converting");
        let mut batch_result = BatchResult::default();

        for job in jobs {
            let result = self.process(job);

            pb.suspend(|| match &result {
                ProcessResult::Success(job) => {
                    if !self.quiet {
                        output::print_conversion(
                            &job.input.display().to_string(),
                            &job.output.display().to_string(),
                        );
                    }
                }
                ProcessResult::Failed(job, err) => {
                    output::print_error(&format!("{}: {}", job.input.display(), err));
                }
            });

            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}
