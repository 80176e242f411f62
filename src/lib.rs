//! # Bench Runner Library / Bench Runner 库
//!
//! This library provides the core functionality for the Bench Runner tool,
//! a harness that runs an interpreter against declarative input/expected-output
//! suites and reports tolerance-aware results.
//!
//! 此库为 Bench Runner 工具提供核心功能，
//! 这是一个针对声明式输入/期望输出套件运行解释器，并报告带容差比较结果的测试框架。
//!
//! ## Modules / 模块
//!
//! - `core` - Value model, specification documents, comparison and execution
//! - `infra` - Process invocation, binary discovery and i18n
//! - `reporting` - Console, JSON and HTML reports
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 值模型、规范文档、比较和执行
//! - `infra` - 进程调用、二进制文件发现和国际化
//! - `reporting` - 控制台、JSON 和 HTML 报告
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::{compare, execution, models, spec};

/// Resolves the UI language from an explicit choice or the system locale.
///
/// An explicit, available locale wins. Otherwise the system locale is matched
/// in full (e.g. "zh-CN"), then by language code (e.g. "en" from "en-US"),
/// falling back to "en".
pub fn resolve_locale(explicit: Option<&str>) -> String {
    let available_locales = rust_i18n::available_locales!();
    let is_available = |lang: &str| available_locales.iter().any(|l| *l == lang);

    if let Some(lang) = explicit.filter(|lang| is_available(lang)) {
        return lang.to_string();
    }

    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    if is_available(&locale) {
        return locale;
    }
    locale
        .split('-')
        .next()
        .filter(|lang_code| is_available(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
