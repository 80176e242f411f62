//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML run reports.
//! It creates a self-contained, styled page with summary tiles and one results
//! table per category.
//!
//! 此模块处理 HTML 运行报告的生成。
//! 它创建一个自包含的样式化页面，包含摘要卡片以及每个类别一个结果表格。

use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;

use crate::core::models::{CaseResult, CategoryResult, RunSummary};
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 2rem; color: #24292f; }
h1 { margin-bottom: 0.25rem; }
.generated { color: #57606a; font-size: 0.9rem; }
.summary-container { display: flex; gap: 1rem; margin: 1.5rem 0; }
.summary-item { border: 1px solid #d0d7de; border-radius: 6px; padding: 0.75rem 1.25rem; text-align: center; }
.summary-item .count { display: block; font-size: 1.6rem; font-weight: 600; }
.summary-item .label { color: #57606a; }
.passed-text { color: #1a7f37; }
.failed-text { color: #cf222e; }
table { border-collapse: collapse; width: 100%; margin-bottom: 2rem; }
th, td { border-bottom: 1px solid #d0d7de; padding: 0.4rem 0.6rem; text-align: left; font-family: ui-monospace, monospace; }
th { background: #f6f8fa; }
.status-Passed { color: #1a7f37; }
.status-Failed { color: #cf222e; }
.status-Error { color: #cf222e; font-weight: 600; }
.status-Timeout { color: #9a6700; font-weight: 600; }
"#;

/// Generates an HTML report from a run summary.
///
/// # Arguments / 参数
/// * `summary` - The finished run / 已完成的运行
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
/// * `locale` - The locale to use for labels / 标签使用的语言环境
///
/// # Errors / 错误
/// Returns an error if the output file cannot be written.
/// 无法写入输出文件时返回错误。
pub fn generate_html_report(summary: &RunSummary, output_path: &Path, locale: &str) -> Result<()> {
    let page = render_html_report(summary, locale);
    fs::write(output_path, page.into_string()).with_context(|| {
        t!("html_report.write_failed", locale = locale, path = output_path.display()).to_string()
    })
}

/// Builds the report markup without touching the file system.
pub fn render_html_report(summary: &RunSummary, locale: &str) -> Markup {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale).to_string()) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale).to_string()) }
                p class="generated" {
                    (t!("html_report.generated_at", locale = locale, time = generated_at).to_string())
                }
                div class="summary-container" {
                    (summary_item(summary.total(), "", &t!("html_report.summary.total", locale = locale)))
                    (summary_item(summary.passed(), "passed-text", &t!("html_report.summary.passed", locale = locale)))
                    (summary_item(summary.failed(), "failed-text", &t!("html_report.summary.failed", locale = locale)))
                    div class="summary-item" {
                        span class="count" { (format!("{:.1}%", summary.pass_rate() * 100.0)) }
                        span class="label" { (t!("html_report.summary.pass_rate", locale = locale).to_string()) }
                    }
                }
                @for category in summary.categories() {
                    (category_table(category, locale))
                }
            }
        }
    }
}

fn summary_item(count: usize, class: &str, label: &str) -> Markup {
    html! {
        div class="summary-item" {
            span class={ "count " (class) } { (count) }
            span class="label" { (label) }
        }
    }
}

fn category_table(category: &CategoryResult, locale: &str) -> Markup {
    html! {
        h2 {
            (category.name()) " "
            span class=(if category.failed() == 0 { "passed-text" } else { "failed-text" }) {
                (category.passed()) "/" (category.total())
            }
        }
        table {
            thead {
                tr {
                    th { (t!("html_report.table.header.status", locale = locale).to_string()) }
                    th { (t!("html_report.table.header.name", locale = locale).to_string()) }
                    th { (t!("html_report.table.header.expected", locale = locale).to_string()) }
                    th { (t!("html_report.table.header.actual", locale = locale).to_string()) }
                }
            }
            tbody {
                @for result in category.results() {
                    (result_row(result, locale))
                }
            }
        }
    }
}

fn result_row(result: &CaseResult, locale: &str) -> Markup {
    let status = match (result.passed, result.error.is_some()) {
        (true, _) => t!("html_report.status.passed", locale = locale),
        (false, false) => t!("html_report.status.failed", locale = locale),
        (false, true) if result.is_timeout() => t!("html_report.status.timeout", locale = locale),
        (false, true) => t!("html_report.status.error", locale = locale),
    };

    html! {
        tr {
            td class=(result.get_status_class()) { (status.to_string()) }
            td { (result.name) }
            td { (result.expected.to_string()) }
            td { (result.actual_or_error()) }
        }
    }
}
