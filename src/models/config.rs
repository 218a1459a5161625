//! # 转换配置
//!
//! 保存 pandoc 路径、输入根目录和输出根目录，构造后不可变。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 构造
//! - 被 `models/job.rs` 和 `converter/pandoc.rs` 读取

use crate::error::{PandocBatchError, Result};

use std::path::{self, Path, PathBuf};

/// 一次批量转换的配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// pandoc 可执行文件
    pub pandoc: PathBuf,
    /// 输入根目录（绝对路径）
    pub input_root: PathBuf,
    /// 输出根目录（绝对路径），未指定时等于输入根目录
    pub output_root: PathBuf,
}

impl ConverterConfig {
    /// 校验并构造配置
    ///
    /// 输入目录必须存在，pandoc 必须是已存在的文件。两个根目录都会转为
    /// 绝对路径，因为 pandoc 的工作目录会被切换到输入根目录。
    pub fn new(pandoc: PathBuf, input_root: &Path, output_root: Option<&Path>) -> Result<Self> {
        if !input_root.is_dir() {
            return Err(PandocBatchError::InputDirectoryNotFound {
                path: input_root.display().to_string(),
            });
        }

        if !pandoc.is_file() {
            return Err(PandocBatchError::ConverterNotFound {
                path: pandoc.display().to_string(),
            });
        }

        let input_root = absolutize(input_root)?;
        let output_root = match output_root {
            Some(root) if !root.as_os_str().is_empty() => absolutize(root)?,
            _ => input_root.clone(),
        };

        Ok(Self {
            pandoc,
            input_root,
            output_root,
        })
    }

    /// 输出是否写在源文件旁边
    pub fn is_in_place(&self) -> bool {
        self.output_root == self.input_root
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    path::absolute(path).map_err(|e| PandocBatchError::PathResolveError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_pandoc(dir: &TempDir) -> PathBuf {
        let pandoc = dir.path().join("pandoc");
        fs::write(&pandoc, "").unwrap();
        pandoc
    }

    #[test]
    fn test_missing_input_directory() {
        let dir = TempDir::new().unwrap();
        let pandoc = fake_pandoc(&dir);
        let err = ConverterConfig::new(pandoc, &dir.path().join("nope"), None).unwrap_err();
        assert!(matches!(err, PandocBatchError::InputDirectoryNotFound { .. }));
    }

    #[test]
    fn test_missing_pandoc() {
        let dir = TempDir::new().unwrap();
        let err =
            ConverterConfig::new(dir.path().join("pandoc"), dir.path(), None).unwrap_err();
        assert!(matches!(err, PandocBatchError::ConverterNotFound { .. }));
    }

    #[test]
    fn test_output_root_defaults_to_input_root() {
        let dir = TempDir::new().unwrap();
        let pandoc = fake_pandoc(&dir);

        let config = ConverterConfig::new(pandoc.clone(), dir.path(), None).unwrap();
        assert!(config.is_in_place());

        let config = ConverterConfig::new(pandoc, dir.path(), Some(Path::new(""))).unwrap();
        assert!(config.is_in_place());
    }

    #[test]
    fn test_separate_output_root() {
        let dir = TempDir::new().unwrap();
        let pandoc = fake_pandoc(&dir);
        let out = dir.path().join("site");

        let config = ConverterConfig::new(pandoc, dir.path(), Some(&out)).unwrap();
        assert!(!config.is_in_place());
        assert_eq!(config.output_root, out);
    }
}
