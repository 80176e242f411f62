//! # Reporting Module / 报告模块
//!
//! This module renders run results in three formats: a colorful console
//! summary, a structured JSON document, and a styled HTML page.
//!
//! 此模块以三种格式呈现运行结果：彩色控制台摘要、结构化 JSON 文档和样式化 HTML 页面。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{print_failure_details, print_summary};
pub use html::generate_html_report;
pub use json::render_json;
