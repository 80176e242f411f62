//! # Data Models Module / 数据模型模块
//!
//! This module defines the result records produced while running a suite:
//! the raw outcome of one invocation, the per-case result, and the per-category
//! and per-run summaries they are folded into.
//!
//! 此模块定义运行测试套件时产生的结果记录：
//! 单次调用的原始结果、每个用例的结果，以及它们被汇总成的类别和运行摘要。

use serde::Serialize;
use std::fmt;

use crate::core::value::Value;

/// Enumerates the ways an invocation of the interpreter can fail.
/// This helps in styling failures for reporting.
/// 枚举解释器调用可能失败的方式。这有助于在报告中区分失败的样式。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum FailureReason {
    /// The process ran and exited with a non-zero status.
    /// 进程运行后以非零状态退出。
    NonZeroExit,
    /// The process exceeded the wall-clock timeout and was killed.
    /// 进程超出了挂钟超时时间并被终止。
    Timeout,
    /// The process could not be started at all.
    /// 进程根本无法启动。
    Spawn,
    /// An output stream broke before it was read to the end.
    /// 输出流在读取完毕之前中断。
    Capture,
}

/// A classified invocation failure with its diagnostic text.
/// 带诊断文本的已分类调用失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationFailure {
    pub reason: FailureReason,
    pub message: String,
}

impl InvocationFailure {
    pub fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    /// The timeout failure. Its message is always `Timeout`.
    /// 超时失败，其消息始终为 `Timeout`。
    pub fn timeout() -> Self {
        Self::new(FailureReason::Timeout, "Timeout")
    }
}

impl fmt::Display for InvocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The raw result of one invocation, before any comparison.
/// Exactly one of output or failure exists.
///
/// 单次调用的原始结果（比较之前）。输出和失败恰好存在其一。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Trimmed standard output of a successful (exit 0) run.
    /// 成功运行（退出码 0）后去除空白的标准输出。
    Output(String),
    /// The invocation failed.
    /// 调用失败。
    Failed(InvocationFailure),
}

impl ExecutionOutcome {
    pub fn output(&self) -> Option<&str> {
        match self {
            ExecutionOutcome::Output(text) => Some(text),
            ExecutionOutcome::Failed(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExecutionOutcome::Failed(_))
    }
}

/// The final result of a single test case.
///
/// `error` is set exactly when the invocation failed, and `passed` is `false`
/// whenever `error` is set. A comparison mismatch has `passed == false` with
/// `error == None`.
///
/// 单个测试用例的最终结果。
/// 当且仅当调用失败时设置 `error`；只要设置了 `error`，`passed` 就为 `false`。
/// 比较不匹配时 `passed == false` 且 `error == None`。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    /// Rendered call signature, e.g. `gcd(48, 18)`.
    pub name: String,
    pub passed: bool,
    pub expected: Value,
    pub actual: Option<String>,
    pub error: Option<String>,
    /// Failure class, kept for report styling only.
    #[serde(skip)]
    pub reason: Option<FailureReason>,
}

impl CaseResult {
    /// Builds a result from an invocation outcome and the comparator verdict.
    /// The verdict is ignored for failed invocations.
    ///
    /// 根据调用结果和比较器判定构建结果。对于失败的调用，判定会被忽略。
    pub fn from_outcome(
        name: String,
        expected: Value,
        outcome: ExecutionOutcome,
        verdict: bool,
    ) -> Self {
        match outcome {
            ExecutionOutcome::Output(actual) => Self {
                name,
                passed: verdict,
                expected,
                actual: Some(actual),
                error: None,
                reason: None,
            },
            ExecutionOutcome::Failed(failure) => Self {
                name,
                passed: false,
                expected,
                actual: None,
                error: Some(failure.message),
                reason: Some(failure.reason),
            },
        }
    }

    /// The actual output, or the error text if the invocation failed.
    /// 实际输出；如果调用失败则为错误文本。
    pub fn actual_or_error(&self) -> &str {
        self.actual
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or_default()
    }

    pub fn is_timeout(&self) -> bool {
        self.reason == Some(FailureReason::Timeout)
    }

    /// Gets the CSS class used for this result in the HTML report.
    pub fn get_status_class(&self) -> &'static str {
        match (self.passed, self.reason) {
            (true, _) => "status-Passed",
            (false, Some(FailureReason::Timeout)) => "status-Timeout",
            (false, Some(_)) => "status-Error",
            (false, None) => "status-Failed",
        }
    }
}

/// Accumulated results for one category.
/// The counters always satisfy `passed + failed == results.len()`.
///
/// 一个类别的累积结果。计数器始终满足 `passed + failed == results.len()`。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    name: String,
    passed: usize,
    failed: usize,
    results: Vec<CaseResult>,
}

impl CategoryResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: 0,
            failed: 0,
            results: Vec::new(),
        }
    }

    /// Appends a case result and bumps the matching counter.
    /// 追加一个用例结果并递增相应的计数器。
    pub fn record(&mut self, result: CaseResult) {
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Case results in document order.
    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

/// Totals across every category of a run.
/// 一次运行中所有类别的总计。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    passed: usize,
    failed: usize,
    categories: Vec<CategoryResult>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a finished category into the run totals.
    /// 将已完成的类别汇入运行总计。
    pub fn absorb(&mut self, category: CategoryResult) {
        self.passed += category.passed();
        self.failed += category.failed();
        self.categories.push(category);
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// `passed / total`, or `0.0` for an empty run.
    /// `passed / total`；空运行时为 `0.0`。
    pub fn pass_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.passed as f64 / total as f64,
        }
    }

    /// A run succeeds when no case failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn categories(&self) -> &[CategoryResult] {
        &self.categories
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.categories.iter().flat_map(CategoryResult::failures)
    }
}
