//! # Value Model Module / 值模型模块
//!
//! Specification documents mix booleans, integers, floats and strings in the
//! same `expected` and `input` fields. This module resolves that shape once, at
//! load time, into a tagged [`Value`], so later stages never inspect raw JSON.
//!
//! 规范文档在同一个 `expected` 和 `input` 字段中混合了布尔值、整数、浮点数和字符串。
//! 此模块在加载时一次性将其解析为带标签的 [`Value`]，之后的阶段无需再检查原始 JSON。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph the interpreter prints for boolean true.
/// 解释器打印的布尔真值符号。
pub const TRUE_GLYPH: &str = "⊤";

/// Glyph the interpreter prints for boolean false.
/// 解释器打印的布尔假值符号。
pub const FALSE_GLYPH: &str = "⊥";

/// A scalar value from a specification document.
///
/// Decoding is untagged and tried in declaration order: a JSON `6` becomes
/// [`Value::Integer`], `6.0` becomes [`Value::Float`], and integers too large
/// for `i64` fall through to [`Value::Float`].
///
/// 规范文档中的标量值。
/// 解码不带标签，并按声明顺序尝试：JSON `6` 成为 [`Value::Integer`]，
/// `6.0` 成为 [`Value::Float`]，超出 `i64` 的整数回退为 [`Value::Float`]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Returns the boolean this value stands for, if it is boolean-shaped.
    ///
    /// Only real booleans and the two truth glyphs qualify. Numeric `0` and `1`
    /// are numbers, never booleans.
    ///
    /// 如果该值是布尔形态，则返回其代表的布尔值。
    /// 只有真正的布尔值和两个真值符号符合条件；数字 `0` 和 `1` 始终是数字。
    pub fn truth(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Text(s) if s == TRUE_GLYPH => Some(true),
            Value::Text(s) if s == FALSE_GLYPH => Some(false),
            _ => None,
        }
    }

    /// Returns the numeric reading of this value, if any.
    /// Text is parsed as a float after trimming; booleans have no numeric reading.
    ///
    /// 返回该值的数值解读（如果有）。文本在去除空白后按浮点数解析；布尔值没有数值解读。
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Bool(_) => None,
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            // Shortest round-trip text: whole floats keep `.0`, extremes use an exponent.
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Renders a call signature such as `gcd(48, 18)` for reporting.
/// 渲染用于报告的调用签名，例如 `gcd(48, 18)`。
pub fn render_call(function: &str, inputs: &[Value]) -> String {
    let args = inputs
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{function}({args})")
}
