//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides path utilities: resolving the project root and locating
//! the interpreter binary.
//!
//! 此模块提供路径工具：解析项目根目录以及定位解释器二进制文件。

use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Build output directories searched for the interpreter, relative to the
/// project root, in priority order.
/// 相对于项目根目录、按优先级排列的解释器构建输出搜索目录。
pub const BUILD_OUTPUT_DIRS: [&str; 4] = [
    "crates/target/release",
    "crates/target/debug",
    "target/release",
    "target/debug",
];

/// Gets the absolute path of the project root.
///
/// # Errors
/// Fails if the directory does not exist.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path)
        .with_context(|| t!("fs.project_root_not_found", path = path.display()).to_string())
}

/// Expands `~` and environment variables in a user-supplied path.
/// 展开用户提供路径中的 `~` 和环境变量。
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand path: {raw}"))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Locates the interpreter binary.
///
/// # Arguments
/// * `project_root` - Anchor for relative paths and build output directories
/// * `explicit` - A user-supplied path or name, which must resolve if given
/// * `binary_name` - The executable name used by the search
///
/// # Returns
/// The path of the binary to invoke.
///
/// # Errors
/// Fails when no candidate exists.
///
/// 定位解释器二进制文件。显式给出的路径必须可以解析；
/// 否则依次搜索构建输出目录和 `PATH`。找不到任何候选时失败。
pub fn locate_binary(
    project_root: &Path,
    explicit: Option<&str>,
    binary_name: &str,
) -> Result<PathBuf> {
    if let Some(raw) = explicit {
        let path = expand_path(raw)?;
        let found = if path.components().count() > 1 || path.is_absolute() {
            let anchored = if path.is_absolute() {
                path
            } else {
                project_root.join(path)
            };
            anchored.is_file().then_some(anchored)
        } else {
            search_path(&path.to_string_lossy())
        };
        return match found {
            Some(path) => Ok(path),
            None => bail!("{}", t!("fs.binary_not_found_explicit", path = raw)),
        };
    }

    let file_name = format!("{binary_name}{}", env::consts::EXE_SUFFIX);
    BUILD_OUTPUT_DIRS
        .iter()
        .map(|dir| project_root.join(dir).join(&file_name))
        .find(|candidate| candidate.is_file())
        .or_else(|| search_path(&file_name))
        .with_context(|| t!("fs.binary_not_found", name = binary_name).to_string())
}

/// Searches the `PATH` environment variable for an executable file.
/// 在 `PATH` 环境变量中搜索可执行文件。
pub fn search_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
