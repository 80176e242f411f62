//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of run results in the console: per-case
//! lines in verbose mode, the per-category summary with the aggregate pass
//! rate, and the listing of failed cases.
//!
//! 此模块处理控制台中运行结果的显示：详细模式下的逐用例输出、
//! 带总通过率的类别摘要，以及失败用例列表。

use colored::*;

use crate::core::models::{CaseResult, RunSummary};
use crate::infra::t;

const PASS_GLYPH: &str = "✓";
const FAIL_GLYPH: &str = "✗";
const RULE_WIDTH: usize = 50;

/// Prints the banner that opens a category in verbose mode.
/// 在详细模式下打印类别开头的横幅。
pub fn print_category_banner(category: &str) {
    println!("\n{}", render_category_banner(category));
}

pub fn render_category_banner(category: &str) -> String {
    format!("=== {} ===", category.to_uppercase()).bold().to_string()
}

/// Prints one verbose line for a finished case.
/// 为已完成的用例打印一行详细信息。
pub fn print_case_line(result: &CaseResult) {
    println!("{}", render_case_line(result));
}

/// Formats a case as `  ✓ gcd(48, 18) = 6 (expected 6)`.
///
/// 将用例格式化为 `  ✓ gcd(48, 18) = 6 (expected 6)`。
pub fn render_case_line(result: &CaseResult) -> String {
    let line = format!(
        "  {} {} = {} ({} {})",
        if result.passed { PASS_GLYPH } else { FAIL_GLYPH },
        result.name,
        result.actual_or_error(),
        t!("report.expected"),
        result.expected
    );
    if result.passed {
        line.green().to_string()
    } else if result.is_timeout() {
        line.yellow().to_string()
    } else {
        line.red().to_string()
    }
}

/// Prints the summary block of a run.
///
/// # Output Format / 输出格式
/// ```text
/// ==================================================
/// SUMMARY
/// ==================================================
/// ✓ basic: 3/3 passed
/// ✗ numeric: 4/5 passed
/// ==================================================
/// TOTAL: 7/8 passed (87.5%)
/// ```
pub fn print_summary(summary: &RunSummary) {
    println!("{}", render_summary(summary));
}

pub fn render_summary(summary: &RunSummary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        t!("report.summary_banner").bold().to_string(),
        rule.clone(),
    ];

    for category in summary.categories() {
        let line = format!(
            "{} {}: {}/{} {}",
            if category.failed() == 0 { PASS_GLYPH } else { FAIL_GLYPH },
            category.name(),
            category.passed(),
            category.total(),
            t!("report.passed")
        );
        lines.push(if category.failed() == 0 {
            line.green().to_string()
        } else {
            line.red().to_string()
        });
    }

    lines.push(rule);
    lines.push(
        format!(
            "{}: {}/{} {} ({:.1}%)",
            t!("report.total"),
            summary.passed(),
            summary.total(),
            t!("report.passed"),
            summary.pass_rate() * 100.0
        )
        .bold()
        .to_string(),
    );

    lines.join("\n")
}

/// Prints every failing case of the run. Prints nothing when all passed.
/// 打印本次运行中的每个失败用例。全部通过时不打印任何内容。
pub fn print_failure_details(summary: &RunSummary) {
    if let Some(details) = render_failure_details(summary) {
        println!("{details}");
    }
}

/// Lists failures as `  ✗ name: expected 6, got 7`.
pub fn render_failure_details(summary: &RunSummary) -> Option<String> {
    if summary.is_success() {
        return None;
    }

    let mut lines = vec![format!("\n{}", t!("report.failed_tests_banner")).red().bold().to_string()];
    for result in summary.failures() {
        lines.push(
            format!(
                "  {} {}: {} {}, {} {}",
                FAIL_GLYPH,
                result.name.cyan(),
                t!("report.expected"),
                result.expected,
                t!("report.got"),
                result.actual_or_error()
            )
        );
    }
    Some(lines.join("\n"))
}
