//! # pandoc 转换器
//!
//! 调用 pandoc 将 Markdown 转为独立、自包含的 HTML。
//!
//! ## 命令模板
//! ```text
//! pandoc -f markdown -t html -s --self-contained -o <output> <input>
//! ```
//! 工作目录为输入根目录，便于 pandoc 解析相对路径的图片和样式。
//!
//! ## 依赖关系
//! - 实现 `converter::Converter`
//! - 使用 `models/`

use super::{CommandLine, Converter};
use crate::error::{PandocBatchError, Result};
use crate::models::{ConversionJob, ConverterConfig};

use std::path::PathBuf;
use std::process::Output;

/// pandoc 转换器
#[derive(Debug, Clone)]
pub struct Pandoc {
    /// 可执行文件路径
    program: PathBuf,
    /// 工作目录（输入根目录）
    workdir: PathBuf,
}

impl Pandoc {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            program: config.pandoc.clone(),
            workdir: config.input_root.clone(),
        }
    }

    /// 预检命令
    pub fn version_command(&self) -> CommandLine {
        CommandLine::new(&self.program).arg("--version")
    }

    /// 单文件转换命令
    pub fn convert_command(&self, job: &ConversionJob) -> CommandLine {
        CommandLine::new(&self.program)
            .arg("-f")
            .arg("markdown")
            .arg("-t")
            .arg("html")
            .arg("-s")
            .arg("--self-contained")
            .arg("-o")
            .arg(&job.output)
            .arg(&job.input)
            .current_dir(&self.workdir)
    }
}

impl Converter for Pandoc {
    fn probe(&self) -> Result<String> {
        let command = self.version_command();
        let output = command
            .output()
            .map_err(|e| PandocBatchError::ConverterUnavailable {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PandocBatchError::ConverterUnavailable {
                command: command.to_string(),
                reason: failure_reason(&output),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().trim().to_string())
    }

    fn convert(&self, job: &ConversionJob) -> Result<()> {
        let command = self.convert_command(job);
        match command.output() {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => Err(PandocBatchError::ConversionFailed {
                command: command.to_string(),
                reason: failure_reason(&output),
            }),
            Err(e) => Err(PandocBatchError::ConversionFailed {
                command: command.to_string(),
                reason: format!("failed to launch: {}", e),
            }),
        }
    }
}

/// 非零退出时的原因：退出状态 + stderr
fn failure_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("pandoc exited with {}", output.status)
    } else {
        format!("pandoc exited with {}: {}", output.status, stderr)
    }
}
