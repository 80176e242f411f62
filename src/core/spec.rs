//! # Specification Document Module / 规范文档模块
//!
//! This module defines the on-disk test specification format, one JSON document
//! per category, and loads it into immutable in-memory definitions. Legacy
//! tolerance fields are normalized here so the comparator only ever sees the
//! canonical `reltol`/`abstol` pair.
//!
//! 此模块定义磁盘上的测试规范格式（每个类别一个 JSON 文档），并将其加载为不可变的内存定义。
//! 旧版容差字段在此处规范化，因此比较器只会看到标准的 `reltol`/`abstol` 对。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::value::{Value, render_call};

/// Numeric tolerance overrides for a single case.
/// `None` means "use the comparator default".
///
/// 单个用例的数值容差覆盖。`None` 表示使用比较器默认值。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Tolerance {
    pub reltol: Option<f64>,
    pub abstol: Option<f64>,
}

/// The raw shape of a case as written in the document.
#[derive(Debug, Deserialize)]
struct RawTestCase {
    #[serde(default)]
    input: Vec<Value>,
    expected: Value,
    #[serde(default)]
    reltol: Option<f64>,
    #[serde(default)]
    abstol: Option<f64>,
    /// Legacy alias for `abstol`.
    #[serde(default)]
    tolerance: Option<f64>,
}

/// One concrete input/expected-output pair.
/// 一个具体的输入/期望输出对。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawTestCase")]
pub struct TestCase {
    /// Positional arguments passed to the interpreter after the source file.
    /// 在源文件之后传递给解释器的位置参数。
    pub inputs: Vec<Value>,
    /// The value the interpreter is expected to print.
    /// 期望解释器打印的值。
    pub expected: Value,
    /// Normalized tolerance overrides.
    /// 规范化后的容差覆盖。
    pub tolerance: Tolerance,
}

impl TryFrom<RawTestCase> for TestCase {
    type Error = String;

    fn try_from(raw: RawTestCase) -> Result<Self, Self::Error> {
        let abstol = raw.abstol.or(raw.tolerance);
        for (field, value) in [("reltol", raw.reltol), ("abstol", abstol)] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(format!(
                        "{field} must be a finite, non-negative number (got {v})"
                    ));
                }
            }
        }
        Ok(Self {
            inputs: raw.input,
            expected: raw.expected,
            tolerance: Tolerance {
                reltol: raw.reltol,
                abstol,
            },
        })
    }
}

/// A function under test, the source file implementing it, and its cases.
/// 被测函数、实现它的源文件及其用例。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestDefinition {
    /// Function name, used only to render case identities.
    pub name: String,
    /// Source file path, relative to the project root.
    pub file: PathBuf,
    pub cases: Vec<TestCase>,
}

impl TestDefinition {
    /// Renders the reporting identity of a case, e.g. `gcd(48, 18)`.
    /// 渲染用例的报告标识，例如 `gcd(48, 18)`。
    pub fn case_name(&self, case: &TestCase) -> String {
        render_call(&self.name, &case.inputs)
    }
}

/// A whole category document.
/// 一个完整的类别文档。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestSpecFile {
    pub category: String,
    pub tests: Vec<TestDefinition>,
}

impl TestSpecFile {
    /// Reads and decodes a specification document from disk.
    ///
    /// # Errors
    /// Returns an error naming the file if it cannot be read or is not a valid
    /// specification document.
    ///
    /// 从磁盘读取并解码规范文档。如果文件无法读取或不是有效的规范文档，返回包含文件名的错误。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read specification file: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid specification file: {}", path.display()))
    }

    /// Decodes a specification document from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Total number of cases across all definitions.
    pub fn case_count(&self) -> usize {
        self.tests.iter().map(|t| t.cases.len()).sum()
    }
}
