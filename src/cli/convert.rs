//! # 转换参数定义
//!
//! 递归扫描目录中的 Markdown 文件并调用 pandoc 转换为 HTML。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::env;
use std::path::{Path, PathBuf};

/// 转换参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory to scan for Markdown files
    #[arg(value_name = "INPUT_DIRECTORY")]
    pub input_directory: PathBuf,

    /// Path to the pandoc executable (default: pandoc next to this program, then PATH)
    #[arg(long, env = "PANDOC_BATCH_PANDOC")]
    pub pandoc: Option<PathBuf>,

    /// Output root directory (default: alongside the source files)
    #[arg(
        long = "output_directory",
        visible_alias = "output-directory",
        value_name = "PATH",
        default_value = ""
    )]
    pub output_directory: String,

    /// Exit with a non-zero status when any file fails to convert
    #[arg(long, default_value_t = false)]
    pub fail_on_error: bool,

    /// Only report failures and the final summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl ConvertArgs {
    /// 输出根目录，空字符串表示与输入目录相同
    pub fn output_root(&self) -> Option<PathBuf> {
        if self.output_directory.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.output_directory))
        }
    }

    /// 解析最终使用的 pandoc 路径
    pub fn pandoc_path(&self) -> PathBuf {
        match &self.pandoc {
            Some(path) => path.clone(),
            None => default_pandoc_path(),
        }
    }
}

/// pandoc 可执行文件的候选名称
const PANDOC_NAMES: [&str; 2] = ["pandoc", "pandoc.exe"];

/// 默认 pandoc 路径：程序所在目录 -> PATH -> 裸名称
fn default_pandoc_path() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    if let Some(found) = exe_dir.as_deref().and_then(find_in_dir) {
        return found;
    }

    if let Some(paths) = env::var_os("PATH") {
        if let Some(found) = env::split_paths(&paths).find_map(|dir| find_in_dir(&dir)) {
            return found;
        }
    }

    PathBuf::from(PANDOC_NAMES[0])
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    PANDOC_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}
