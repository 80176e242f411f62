//! # Run Planner Module / 运行计划模块
//!
//! This module decides which specification files a run covers: either the one
//! category named on the command line, or every document in the tests
//! directory in file-name order.
//!
//! 此模块决定一次运行覆盖哪些规范文件：命令行指定的单个类别，或测试目录中按文件名排序的所有文档。

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// File extension of specification documents.
pub const SPEC_EXTENSION: &str = "json";

/// Represents the set of specification files a run will execute.
/// 表示一次运行将执行的规范文件集合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Specification files in execution order.
    /// 按执行顺序排列的规范文件。
    pub spec_files: Vec<PathBuf>,
    /// Whether the plan was narrowed to a single named category.
    /// 计划是否被限定为单个指定类别。
    pub single_category: bool,
}

/// Creates the run plan for a tests directory.
///
/// # Arguments
/// * `tests_dir` - Directory holding one `<category>.json` per category
/// * `category` - Optional category name to run on its own
///
/// # Errors
/// Fails when the named category has no document, or when the tests
/// directory cannot be listed.
///
/// 为测试目录创建运行计划。当指定类别没有对应文档或测试目录无法列出时失败。
pub fn plan_run(tests_dir: &Path, category: Option<&str>) -> Result<RunPlan> {
    if let Some(name) = category {
        let path = tests_dir.join(format!("{name}.{SPEC_EXTENSION}"));
        if !path.is_file() {
            bail!("{}", t!("plan.category_not_found", name = name));
        }
        return Ok(RunPlan {
            spec_files: vec![path],
            single_category: true,
        });
    }

    let entries = fs::read_dir(tests_dir).with_context(|| {
        t!("plan.tests_dir_unreadable", path = tests_dir.display()).to_string()
    })?;

    let mut spec_files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(SPEC_EXTENSION)
        })
        .collect();

    // Sort by file name for a deterministic category order.
    spec_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(RunPlan {
        spec_files,
        single_category: false,
    })
}
