//! # 外部转换器模块
//!
//! 抽象外部文档转换器，批量执行器只依赖 `Converter` trait。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/convert.rs` 使用
//! - 子模块: pandoc

pub mod pandoc;

pub use pandoc::Pandoc;

use crate::error::Result;
use crate::models::ConversionJob;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Output};

/// 外部转换器
pub trait Converter {
    /// 预检：确认转换器可以运行，返回版本信息
    fn probe(&self) -> Result<String>;

    /// 转换单个文件，成功时输出文件已写入 `job.output`
    fn convert(&self, job: &ConversionJob) -> Result<()>;
}

/// 一次外部命令调用的完整描述
///
/// 每个任务只构造一次，同时用于执行和错误报告。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// 运行并等待退出，捕获 stdout/stderr
    pub fn output(&self) -> std::io::Result<Output> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command.output()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", quote(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

fn quote(s: &str) -> String {
    if !s.is_empty() && !s.contains(char::is_whitespace) && !s.contains('"') {
        s.to_string()
    } else {
        format!("\"{}\"", s.replace('"', "\\\""))
    }
}
