//! # Run Aggregator Module / 运行汇总模块
//!
//! Drives the category runner across the selected specification files and
//! folds their results into a single [`RunSummary`].
//!
//! 在所选规范文件上驱动类别运行器，并将结果汇总为单个 [`RunSummary`]。

use anyhow::Result;
use std::path::PathBuf;

use crate::{
    core::{
        execution::{RunOptions, run_category},
        models::RunSummary,
    },
    infra::command::Invoke,
};

/// Runs every specification file in the given order.
///
/// # Errors
/// Stops at the first document that cannot be loaded. Case failures are never
/// errors; they are counted in the summary.
///
/// 按给定顺序运行每个规范文件。遇到第一个无法加载的文档时停止；用例失败不是错误，只计入摘要。
pub async fn run<I: Invoke>(
    invoker: &I,
    spec_files: &[PathBuf],
    options: &RunOptions,
) -> Result<RunSummary> {
    let mut summary = RunSummary::new();
    for spec_file in spec_files {
        let category = run_category(invoker, spec_file, options).await?;
        summary.absorb(category);
    }
    Ok(summary)
}
