//! # Comparator Unit Tests / 比较器单元测试
//!
//! Covers the boolean, numeric and string branches of `compare`, the
//! tolerance boundary of `is_close`, and property tests across magnitudes.
//!
//! 覆盖 `compare` 的布尔、数值和字符串分支、`is_close` 的容差边界，以及跨数量级的属性测试。

use bench_runner::core::compare::{DEFAULT_ABSTOL, DEFAULT_RELTOL, compare, is_close, parse_truth};
use bench_runner::core::value::Value;
use proptest::prelude::*;

fn check(expected: impl Into<Value>, actual: &str) -> bool {
    compare(&expected.into(), Some(actual), None, None)
}

#[cfg(test)]
mod boolean_tests {
    use super::*;

    #[test]
    fn test_truth_table() {
        for (expected, actual, want) in [
            (Value::from(true), "⊤", true),
            (Value::from(true), "true", true),
            (Value::from(true), "True", true),
            (Value::from(true), "1", true),
            (Value::from(true), "⊥", false),
            (Value::from(true), "0", false),
            (Value::from(false), "⊥", true),
            (Value::from(false), "false", true),
            (Value::from(false), "FALSE", true),
            (Value::from(false), "0", true),
            (Value::from(false), "1", false),
            (Value::from("⊤"), "true", true),
            (Value::from("⊥"), "⊤", false),
            (Value::from(true), "yes", false),
        ] {
            assert_eq!(
                compare(&expected, Some(actual), None, None),
                want,
                "expected {expected:?} vs actual {actual:?}"
            );
        }
    }

    #[test]
    fn test_glyph_expectation_matches_word_output() {
        // isPrime(15) expected "⊥", interpreter prints "false".
        assert!(check("⊥", "false"));
    }

    #[test]
    fn test_numeric_zero_and_one_are_not_booleans() {
        assert!(!check(1_i64, "⊤"));
        assert!(!check(0_i64, "⊥"));
        assert!(!check(1_i64, "true"));
        assert!(check(1_i64, "1"));
        assert!(check(0_i64, "0"));
    }

    #[test]
    fn test_boolean_expectation_never_compares_numerically() {
        assert!(!compare(&Value::from(true), Some("1.0"), None, Some(1.0)));
    }

    #[test]
    fn test_parse_truth_rejects_other_text() {
        assert_eq!(parse_truth("⊤"), Some(true));
        assert_eq!(parse_truth("fAlSe"), Some(false));
        assert_eq!(parse_truth("2"), None);
        assert_eq!(parse_truth(""), None);
    }
}

#[cfg(test)]
mod numeric_tests {
    use super::*;

    #[test]
    fn test_integer_exact_match() {
        // gcd(48, 18) expected 6, interpreter prints "6".
        assert!(check(6_i64, "6"));
        assert!(!check(6_i64, "7"));
    }

    #[test]
    fn test_default_relative_tolerance() {
        // harmonic(10) printed with fewer digits than expected.
        assert!(check(2.9289682539, "2.928968254"));
        assert!(!check(2.9289682539, "2.92896825"));
    }

    #[test]
    fn test_integer_expectation_accepts_float_output() {
        assert!(check(6_i64, "6.0"));
        assert!(check(1.0, "1"));
    }

    #[test]
    fn test_explicit_tolerances() {
        let expected = Value::from(3.14159);
        assert!(compare(&expected, Some("3.14"), Some(1e-3), None));
        assert!(!compare(&expected, Some("3.14"), Some(1e-4), None));
        assert!(compare(&expected, Some("3.14"), None, Some(0.01)));
    }

    #[test]
    fn test_absolute_tolerance_near_zero() {
        assert!(check(0.0, "1e-13"));
        assert!(!check(0.0, "1e-11"));
    }

    #[test]
    fn test_output_is_trimmed() {
        assert!(check(42_i64, "  42\n"));
    }

    #[test]
    fn test_numeric_text_expectation() {
        assert!(check("2.5", "2.50"));
    }

    #[test]
    fn test_non_finite_values() {
        assert!(check(f64::INFINITY, "inf"));
        assert!(!check(f64::INFINITY, "-inf"));
        assert!(!check(1.0, "NaN"));
        assert!(!is_close(f64::NAN, f64::NAN, 1.0, 1.0));
    }

    #[test]
    fn test_is_close_boundary_is_inclusive() {
        assert!(is_close(100.0, 101.0, 0.0, 1.0));
        assert!(!is_close(100.0, 101.5, 0.0, 1.0));
    }
}

#[cfg(test)]
mod string_tests {
    use super::*;

    #[test]
    fn test_exact_string_match() {
        assert!(check("hello world", "hello world"));
        assert!(check("hello", "hello\n"));
        assert!(!check("hello", "Hello"));
    }

    #[test]
    fn test_non_numeric_output_against_number() {
        assert!(!check(5_i64, "five"));
    }

    #[test]
    fn test_missing_output_never_matches() {
        assert!(!compare(&Value::from(""), None, None, None));
        assert!(!compare(&Value::from(true), None, None, None));
        assert!(!compare(&Value::from(0_i64), None, None, None));
    }
}

proptest! {
    #[test]
    fn prop_exact_equality_always_matches(x in -1e15f64..1e15f64) {
        prop_assert!(is_close(x, x, 0.0, 0.0));
        prop_assert!(check(x, &x.to_string()));
    }

    #[test]
    fn prop_relative_bound_holds_across_magnitudes(
        mantissa in 1.0f64..10.0,
        exponent in -15i32..=15,
        factor in 0.0f64..0.9,
    ) {
        let x = mantissa * 10f64.powi(exponent);
        let inside = x + x * DEFAULT_RELTOL * factor;
        prop_assert!(is_close(inside, x, DEFAULT_RELTOL, DEFAULT_ABSTOL));
    }

    #[test]
    fn prop_outside_relative_bound_fails(
        mantissa in 1.0f64..10.0,
        exponent in -5i32..=15,
    ) {
        let x = mantissa * 10f64.powi(exponent);
        let outside = x * (1.0 + 1e-6);
        prop_assert!(!is_close(outside, x, DEFAULT_RELTOL, DEFAULT_ABSTOL));
    }

    /// `actual` sits `k` bounds away from `expected`, on either side of the
    /// boundary, with tolerances drawn log-uniformly.
    #[test]
    fn prop_compare_follows_tolerance_formula(
        mantissa in 1.0f64..10.0,
        exponent in -15i32..=15,
        negative in any::<bool>(),
        reltol_exp in -12.0f64..-3.0,
        abstol_exp in -15.0f64..-3.0,
        k in prop_oneof![0.0f64..0.99, 1.01f64..3.0],
        towards_zero in any::<bool>(),
    ) {
        let sign = if negative { -1.0 } else { 1.0 };
        let expected = sign * mantissa * 10f64.powi(exponent);
        let reltol = 10f64.powf(reltol_exp);
        let abstol = 10f64.powf(abstol_exp);

        let bound = (reltol * expected.abs()).max(abstol);
        let step = if towards_zero { -sign } else { sign };
        let actual = expected + step * k * bound;

        let formula =
            (actual - expected).abs() <= (reltol * actual.abs().max(expected.abs())).max(abstol);
        let verdict = compare(
            &Value::Float(expected),
            Some(&actual.to_string()),
            Some(reltol),
            Some(abstol),
        );

        prop_assert_eq!(verdict, formula);
        prop_assert_eq!(verdict, k < 1.0);
    }

    #[test]
    fn prop_close_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        prop_assert_eq!(
            is_close(a, b, DEFAULT_RELTOL, DEFAULT_ABSTOL),
            is_close(b, a, DEFAULT_RELTOL, DEFAULT_ABSTOL)
        );
    }
}
