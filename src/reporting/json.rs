//! # Structured Reporting Module / 结构化报告模块
//!
//! Renders a [`RunSummary`] as a JSON document with aggregate totals and the
//! full per-category, per-case detail, for machines and CI pipelines.
//!
//! 将 [`RunSummary`] 渲染为包含总计以及完整类别、用例详情的 JSON 文档，供机器和 CI 流水线使用。

use anyhow::Result;
use serde::Serialize;

use crate::core::models::{CaseResult, CategoryResult, RunSummary};

/// Top-level document.
/// 顶层文档。
#[derive(Debug, Serialize)]
pub struct StructuredReport<'a> {
    pub summary: SummarySection,
    pub categories: Vec<CategorySection<'a>>,
}

/// Aggregate totals of a run.
#[derive(Debug, Serialize)]
pub struct SummarySection {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
}

/// One category with its own totals and ordered case results.
#[derive(Debug, Serialize)]
pub struct CategorySection<'a> {
    pub name: &'a str,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub tests: &'a [CaseResult],
}

impl<'a> StructuredReport<'a> {
    pub fn from_summary(summary: &'a RunSummary) -> Self {
        Self {
            summary: SummarySection {
                total: summary.total(),
                passed: summary.passed(),
                failed: summary.failed(),
                pass_rate: summary.pass_rate(),
            },
            categories: summary.categories().iter().map(CategorySection::from).collect(),
        }
    }
}

impl<'a> From<&'a CategoryResult> for CategorySection<'a> {
    fn from(category: &'a CategoryResult) -> Self {
        Self {
            name: category.name(),
            total: category.total(),
            passed: category.passed(),
            failed: category.failed(),
            tests: category.results(),
        }
    }
}

/// Renders the pretty-printed JSON document for a run.
/// 为一次运行渲染格式化的 JSON 文档。
pub fn render_json(summary: &RunSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&StructuredReport::from_summary(
        summary,
    ))?)
}
