//! # 文件收集器
//!
//! 递归收集输入目录下的 Markdown 文件。
//!
//! ## 功能
//! - 文件名后缀大小写不敏感匹配（`.md` / `.MD` / `.Md`，包括名为 `.md` 的文件）
//! - 递归目录搜索，指向文件的符号链接计入结果，不进入符号链接目录
//! - 无法读取的子目录只记录警告，继续扫描其余部分
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::PandocBatchError;
use crate::models::has_markdown_suffix;

use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// 文件收集器
pub struct FileCollector {
    /// 输入根目录
    input: PathBuf,
}

/// 收集结果：匹配的文件与扫描过程中遇到的错误
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub errors: Vec<PandocBatchError>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self { input }
    }

    /// 收集所有匹配的文件（排序后返回）
    pub fn collect(&self) -> Discovery {
        self.gather(self.walker())
    }

    /// 目录遍历器：不进入符号链接指向的目录
    fn walker(&self) -> walkdir::IntoIter {
        WalkDir::new(&self.input).sort_by_file_name().into_iter()
    }

    /// 从遍历结果中筛选文件并记录错误
    fn gather<I>(&self, entries: I) -> Discovery
    where
        I: IntoIterator<Item = walkdir::Result<DirEntry>>,
    {
        let mut discovery = Discovery::default();

        for entry in entries {
            match entry {
                Ok(entry) => {
                    if is_markdown_file(&entry) {
                        discovery.files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let path = e
                        .path()
                        .unwrap_or(&self.input)
                        .display()
                        .to_string();
                    discovery.errors.push(PandocBatchError::DiscoveryError {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        discovery.files.sort();
        discovery
    }
}

/// 普通文件或指向文件的符号链接，且文件名以 `.md` 结尾
fn is_markdown_file(entry: &DirEntry) -> bool {
    if !has_markdown_suffix(entry.file_name()) {
        return false;
    }

    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# title\n").unwrap();
    }

    #[test]
    fn test_case_insensitive_match() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "notes.MD");
        touch(dir.path(), "readme.md");
        touch(dir.path(), "image.png");

        let found = FileCollector::new(dir.path().to_path_buf()).collect();
        assert!(found.errors.is_empty());
        assert_eq!(
            found.files,
            vec![dir.path().join("notes.MD"), dir.path().join("readme.md")]
        );
    }

    #[test]
    fn test_recursive_and_exact_extension() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/b/c/deep.Md");
        touch(dir.path(), "a/top.md");
        touch(dir.path(), "a/archive.md.bak");
        touch(dir.path(), "a/notmd");
        touch(dir.path(), "a/x.markdown");
        fs::create_dir_all(dir.path().join("folder.md")).unwrap();

        let found = FileCollector::new(dir.path().to_path_buf()).collect();
        assert_eq!(
            found.files,
            vec![dir.path().join("a/b/c/deep.Md"), dir.path().join("a/top.md")]
        );
    }

    #[test]
    fn test_empty_tree() {
        let dir = TempDir::new().unwrap();
        let found = FileCollector::new(dir.path().to_path_buf()).collect();
        assert!(found.files.is_empty());
        assert!(found.errors.is_empty());
    }

    #[test]
    fn test_bare_dot_md_names() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".md");
        touch(dir.path(), "sub/.MD");
        touch(dir.path(), "md");

        let found = FileCollector::new(dir.path().to_path_buf()).collect();
        assert_eq!(
            found.files,
            vec![dir.path().join(".md"), dir.path().join("sub/.MD")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_found() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        touch(elsewhere.path(), "real.md");
        touch(elsewhere.path(), "linked_dir/inner.md");

        symlink(elsewhere.path().join("real.md"), root.path().join("link.md")).unwrap();
        symlink(elsewhere.path().join("missing.md"), root.path().join("dangling.md")).unwrap();
        symlink(elsewhere.path().join("linked_dir"), root.path().join("dir.md")).unwrap();

        let found = FileCollector::new(root.path().to_path_buf()).collect();
        // 悬空链接与目录链接都不算；不进入链接目录
        assert_eq!(found.files, vec![root.path().join("link.md")]);
        assert!(found.errors.is_empty());
    }

    #[test]
    fn test_subdirectory_error_is_recorded_and_siblings_kept() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a_first.md");
        touch(dir.path(), "gone/hidden.md");
        touch(dir.path(), "z_last.md");
        let gone = dir.path().join("gone");

        // 根目录已列出后删除子目录，打开它时必然失败（root 用户也一样）
        let collector = FileCollector::new(dir.path().to_path_buf());
        let walk = collector.walker().inspect(|entry| {
            if let Ok(entry) = entry {
                if entry.file_name() == "a_first.md" {
                    fs::remove_dir_all(&gone).unwrap();
                }
            }
        });
        let found = collector.gather(walk);

        assert_eq!(
            found.files,
            vec![dir.path().join("a_first.md"), dir.path().join("z_last.md")]
        );
        assert_eq!(found.errors.len(), 1);
        match &found.errors[0] {
            PandocBatchError::DiscoveryError { path, .. } => {
                assert_eq!(Path::new(path), gone.as_path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_root_is_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let found = FileCollector::new(dir.path().join("gone")).collect();
        assert!(found.files.is_empty());
        assert_eq!(found.errors.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_does_not_abort() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ok/readme.md");
        touch(dir.path(), "locked/secret.md");
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let found = FileCollector::new(dir.path().to_path_buf()).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(found.files.contains(&dir.path().join("ok/readme.md")));
        // root 用户可以读取任何目录，此时不会产生错误
        if !found.files.contains(&dir.path().join("locked/secret.md")) {
            assert_eq!(found.errors.len(), 1);
        }
    }
}
