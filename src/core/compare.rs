//! # Output Comparison Module / 输出比较模块
//!
//! Decides whether the interpreter's textual output matches an expected value.
//! Branches are tried in a fixed order: boolean, then numeric with combined
//! relative/absolute tolerance, then exact trimmed string equality.
//!
//! 判断解释器的文本输出是否与期望值匹配。
//! 分支按固定顺序尝试：布尔、带相对/绝对组合容差的数值、最后是去除空白后的精确字符串比较。

use crate::core::value::{FALSE_GLYPH, TRUE_GLYPH, Value};

/// Relative tolerance used when a case does not override it.
/// 用例未覆盖时使用的相对容差。
pub const DEFAULT_RELTOL: f64 = 1e-9;

/// Absolute tolerance used when a case does not override it.
/// 用例未覆盖时使用的绝对容差。
pub const DEFAULT_ABSTOL: f64 = 1e-12;

/// Compares an expected value against the interpreter's output.
///
/// # Arguments
/// * `expected` - The expected value from the specification document
/// * `actual` - Captured output, or `None` if the invocation failed
/// * `reltol` - Relative tolerance override, defaults to [`DEFAULT_RELTOL`]
/// * `abstol` - Absolute tolerance override, defaults to [`DEFAULT_ABSTOL`]
///
/// # Returns
/// `true` when the output matches. A missing output never matches.
///
/// 将期望值与解释器输出进行比较。输出缺失时永远不匹配。
pub fn compare(
    expected: &Value,
    actual: Option<&str>,
    reltol: Option<f64>,
    abstol: Option<f64>,
) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    let actual = actual.trim();

    // Boolean-shaped expectations never reach the numeric branch.
    if let Some(want) = expected.truth() {
        return parse_truth(actual) == Some(want);
    }

    if let (Some(want), Ok(got)) = (expected.as_f64(), actual.parse::<f64>()) {
        return is_close(
            got,
            want,
            reltol.unwrap_or(DEFAULT_RELTOL),
            abstol.unwrap_or(DEFAULT_ABSTOL),
        );
    }

    expected.to_string().trim() == actual
}

/// Reads the accepted textual encodings of a boolean.
///
/// `⊤`, `1` and case-insensitive `true` mean true; `⊥`, `0` and
/// case-insensitive `false` mean false. Anything else is not a boolean.
///
/// 读取布尔值可接受的文本编码。其他任何文本都不是布尔值。
pub fn parse_truth(text: &str) -> Option<bool> {
    match text {
        TRUE_GLYPH | "1" => Some(true),
        FALSE_GLYPH | "0" => Some(false),
        s if s.eq_ignore_ascii_case("true") => Some(true),
        s if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Combined relative/absolute closeness:
/// `|a - b| <= max(reltol * max(|a|, |b|), abstol)`.
///
/// Exactly equal values are always close, including both zero and equal
/// infinities. NaN is never close to anything.
///
/// 相对/绝对组合接近判断。完全相等的值总是接近（包括两个零和相等的无穷大）；NaN 与任何值都不接近。
pub fn is_close(a: f64, b: f64, reltol: f64, abstol: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= (reltol * a.abs().max(b.abs())).max(abstol)
}
