//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the benchmark harness:
//! the value model, specification documents, the comparator, result records,
//! and the case, category and run execution logic.
//!
//! 此模块包含基准测试框架的核心功能：
//! 值模型、规范文档、比较器、结果记录，以及用例、类别和运行的执行逻辑。

pub mod aggregator;
pub mod compare;
pub mod config;
pub mod execution;
pub mod models;
pub mod planner;
pub mod spec;
pub mod value;

// Re-exports
pub use compare::compare;
pub use execution::{RunOptions, run_case, run_category};
pub use models::{CaseResult, CategoryResult, ExecutionOutcome, RunSummary};
pub use value::Value;
