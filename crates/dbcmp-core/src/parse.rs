// dbcmp - Database Benchmark Comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Numeric coercion and rounding helpers.
//!
//! Benchmark result files are produced by shell tooling and occasionally carry
//! placeholders (`N/A`, `error`, empty fields) where a run failed. Coercion
//! never fails: an unreadable value is simply absent.

/// Parses a field as a finite number.
///
/// Returns `None` for empty, non-numeric, `NaN` and infinite values.
///
/// # Examples
///
/// ```
/// use dbcmp_core::coerce_numeric;
///
/// assert_eq!(coerce_numeric(" 1520.75 "), Some(1520.75));
/// assert_eq!(coerce_numeric("1e3"), Some(1000.0));
/// assert_eq!(coerce_numeric("N/A"), None);
/// assert_eq!(coerce_numeric(""), None);
/// assert_eq!(coerce_numeric("inf"), None);
/// ```
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses a field as a non-negative whole number (client counts, run indices).
///
/// Integral floats such as `"10.0"` are accepted.
///
/// # Examples
///
/// ```
/// use dbcmp_core::coerce_count;
///
/// assert_eq!(coerce_count("10"), Some(10));
/// assert_eq!(coerce_count("10.0"), Some(10));
/// assert_eq!(coerce_count("10.5"), None);
/// assert_eq!(coerce_count("-1"), None);
/// ```
pub fn coerce_count(raw: &str) -> Option<u32> {
    let value = coerce_numeric(raw)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

/// Rounds `value` to `decimals` places, ties to even.
///
/// Exact halves go to the even neighbour, so `0.25` becomes `0.2` and
/// `0.75` becomes `0.8`.
///
/// # Examples
///
/// ```
/// use dbcmp_core::round_to;
///
/// assert_eq!(round_to(47.5247, 1), 47.5);
/// assert_eq!(round_to(2.346, 2), 2.35);
/// assert_eq!(round_to(1009.6, 0), 1010.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let mut rounded = scaled.round();
    if (rounded - scaled).abs() == 0.5 && rounded % 2.0 != 0.0 {
        rounded -= scaled.signum();
    }
    rounded / factor
}

/// Percentage change of `candidate` relative to `baseline`.
///
/// Returns `None` when the baseline is zero.
///
/// # Examples
///
/// ```
/// use dbcmp_core::percent_change;
///
/// assert_eq!(percent_change(1000.0, 1500.0), Some(50.0));
/// assert_eq!(percent_change(0.0, 10.0), None);
/// ```
pub fn percent_change(baseline: f64, candidate: f64) -> Option<f64> {
    if baseline == 0.0 {
        return None;
    }
    let change = (candidate - baseline) / baseline * 100.0;
    change.is_finite().then_some(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numeric_accepts_plain_numbers() {
        assert_eq!(coerce_numeric("42"), Some(42.0));
        assert_eq!(coerce_numeric("-3.5"), Some(-3.5));
        assert_eq!(coerce_numeric("\t7.25\n"), Some(7.25));
    }

    #[test]
    fn test_coerce_numeric_rejects_garbage() {
        for raw in ["", "   ", "abc", "12abc", "1,000", "NaN", "-inf", "infinity"] {
            assert_eq!(coerce_numeric(raw), None, "{raw:?} should be absent");
        }
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("0"), Some(0));
        assert_eq!(coerce_count("64"), Some(64));
        assert_eq!(coerce_count("1e2"), Some(100));
        assert_eq!(coerce_count("4294967296"), None);
        assert_eq!(coerce_count("many"), None);
    }

    #[test]
    fn test_round_to_negative_values() {
        assert_eq!(round_to(-1.26, 1), -1.3);
        assert_eq!(round_to(-0.04, 1), -0.0);
    }

    #[test]
    fn test_round_to_ties_to_even() {
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(0.75, 1), 0.8);
        assert_eq!(round_to(-1.25, 1), -1.2);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(12.125, 2), 12.12);
    }

    #[test]
    fn test_percent_change_direction() {
        assert_eq!(percent_change(200.0, 100.0), Some(-50.0));
        assert_eq!(percent_change(100.0, 100.0), Some(0.0));
    }
}
