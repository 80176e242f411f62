//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs test cases: one case at a time through [`run_case`], and a
//! whole category document through [`run_category`], which folds the case
//! results into a [`CategoryResult`] in document order.
//!
//! 此模块执行测试用例：通过 [`run_case`] 执行单个用例，通过 [`run_category`]
//! 执行整个类别文档，并按文档顺序将用例结果汇总到 [`CategoryResult`] 中。

use anyhow::Result;
use futures::{StreamExt, stream};
use std::path::Path;

use crate::{
    core::{
        compare::compare,
        models::{CaseResult, CategoryResult},
        spec::{TestCase, TestDefinition, TestSpecFile},
    },
    infra::command::Invoke,
    reporting::console,
};

/// Options shared by every case of a run.
/// 一次运行中所有用例共享的选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Print one line per case as results arrive.
    /// 在结果到达时为每个用例打印一行。
    pub verbose: bool,
    /// Maximum number of cases of a category in flight at once. `1` is strictly
    /// sequential; `0` means one per CPU.
    /// 一个类别中同时执行的最大用例数。`1` 表示严格顺序执行；`0` 表示每个 CPU 一个。
    pub jobs: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            jobs: 1,
        }
    }
}

impl RunOptions {
    /// The effective concurrency limit, never zero.
    pub fn concurrency(&self) -> usize {
        match self.jobs {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

/// Runs a single test case: invoke the interpreter, then compare.
///
/// A failed invocation yields a failing result carrying the error and no actual
/// output; otherwise the comparator decides.
///
/// # Arguments
/// * `invoker` - Runs the interpreter
/// * `definition` - The test definition the case belongs to
/// * `case` - The case to run
///
/// 运行单个测试用例：调用解释器，然后进行比较。
/// 调用失败时产生携带错误且没有实际输出的失败结果；否则由比较器决定。
pub async fn run_case<I: Invoke>(
    invoker: &I,
    definition: &TestDefinition,
    case: &TestCase,
) -> CaseResult {
    let outcome = invoker.invoke(&definition.file, &case.inputs).await;
    let verdict = compare(
        &case.expected,
        outcome.output(),
        case.tolerance.reltol,
        case.tolerance.abstol,
    );
    CaseResult::from_outcome(
        definition.case_name(case),
        case.expected.clone(),
        outcome,
        verdict,
    )
}

/// Loads one specification document and runs every case in it.
///
/// Tests run in file order and cases in list order; the resulting
/// [`CategoryResult`] preserves that order even when `options.jobs > 1`.
/// A failing case never stops the category.
///
/// # Errors
/// Returns an error if the document cannot be read or decoded.
///
/// 加载一个规范文档并运行其中的每个用例。
/// 测试按文件顺序运行，用例按列表顺序运行；即使 `options.jobs > 1`，结果也保持该顺序。
/// 失败的用例不会中止该类别。
pub async fn run_category<I: Invoke>(
    invoker: &I,
    spec_path: &Path,
    options: &RunOptions,
) -> Result<CategoryResult> {
    let spec = TestSpecFile::load(spec_path)?;
    Ok(run_spec(invoker, &spec, options).await)
}

/// Runs an already loaded specification document.
/// 运行已加载的规范文档。
pub async fn run_spec<I: Invoke>(
    invoker: &I,
    spec: &TestSpecFile,
    options: &RunOptions,
) -> CategoryResult {
    let mut category = CategoryResult::new(&spec.category);

    if options.verbose {
        console::print_category_banner(&spec.category);
    }

    let cases = spec
        .tests
        .iter()
        .flat_map(|test| test.cases.iter().map(move |case| (test, case)));

    // `buffered` yields in submission order, so results stay in file order.
    let mut results = stream::iter(cases)
        .map(|(test, case)| run_case(invoker, test, case))
        .buffered(options.concurrency());

    while let Some(result) = results.next().await {
        if options.verbose {
            console::print_case_line(&result);
        }
        category.record(result);
    }

    category
}
