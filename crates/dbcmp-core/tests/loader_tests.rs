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

//! End-to-end tests for loading, aggregating and pivoting result files.

use dbcmp_core::{aggregate, load_pair, Comparison, CoreError, Metric, PivotTable};
use dbcmp_test::fixtures::{self, errors};
use dbcmp_test::write_fixture;
use tempfile::TempDir;

fn write_pair(baseline: &str, candidate: &str) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(dir.path(), "postgre/results.csv", baseline).unwrap();
    let b = write_fixture(dir.path(), "citus/results.csv", candidate).unwrap();
    (dir, a, b)
}

#[test]
fn test_combined_row_count_is_sum_of_valid_rows() {
    let (_dir, a, b) = write_pair(&errors::mixed_csv(3), &fixtures::candidate_csv());
    let dataset = load_pair(&a, &b).unwrap();
    assert_eq!(dataset.len(), 3 + 8);
}

#[test]
fn test_baseline_rows_come_first() {
    let (_dir, a, b) = write_pair(&fixtures::baseline_csv(), &fixtures::candidate_csv());
    let dataset = load_pair(&a, &b).unwrap();

    let engines: Vec<&str> = dataset.records().iter().map(|r| r.engine.as_str()).collect();
    let split = engines.iter().position(|e| *e == fixtures::CANDIDATE).unwrap();
    assert_eq!(split, 8);
    assert!(engines[..split].iter().all(|e| *e == fixtures::BASELINE));
    assert!(engines[split..].iter().all(|e| *e == fixtures::CANDIDATE));
}

#[test]
fn test_missing_candidate_is_reported_by_path() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(dir.path(), "postgre/results.csv", &fixtures::baseline_csv()).unwrap();
    let b = dir.path().join("citus/results.csv");

    let err = load_pair(&a, &b).unwrap_err();
    assert_eq!(err, CoreError::MissingInput { path: b.clone() });
    assert!(err.to_string().contains("citus"));
}

#[test]
fn test_missing_input_checked_before_parsing() {
    let dir = TempDir::new().unwrap();
    // The baseline is broken, but the missing candidate must be reported first.
    let a = write_fixture(dir.path(), "a.csv", &errors::missing_latency_column_csv()).unwrap();
    let b = dir.path().join("b.csv");
    assert!(matches!(load_pair(&a, &b), Err(CoreError::MissingInput { .. })));
}

#[test]
fn test_missing_column_is_fatal() {
    let (_dir, a, b) = write_pair(&fixtures::baseline_csv(), &errors::missing_latency_column_csv());
    let err = load_pair(&a, &b).unwrap_err();
    assert!(matches!(err, CoreError::MissingColumn { ref column, .. } if column == "Latency_Avg_ms"));
}

#[test]
fn test_header_only_candidate() {
    let (_dir, a, b) = write_pair(&fixtures::baseline_csv(), &fixtures::header_only_csv());
    let dataset = load_pair(&a, &b).unwrap();
    assert_eq!(dataset.len(), 8);
    assert_eq!(dataset.engines(), [fixtures::BASELINE]);

    let stats = aggregate(&dataset);
    let pivot = PivotTable::build(&stats, Metric::Throughput, &Comparison::default());
    assert!(!pivot.has_delta());
    assert_eq!(pivot.engines, [fixtures::BASELINE]);
}

#[test]
fn test_workload_present_only_for_baseline() {
    let (_dir, a, b) = write_pair(&fixtures::baseline_csv(), &fixtures::candidate_without_tpcb_csv());
    let stats = aggregate(&load_pair(&a, &b).unwrap());

    assert!(stats.series("tpcb", fixtures::CANDIDATE).is_empty());
    let pivot = PivotTable::build(&stats, Metric::Throughput, &Comparison::default());
    let row = pivot.row("tpcb", 10).unwrap();
    assert_eq!(pivot.cell("tpcb", 10, fixtures::CANDIDATE), None);
    assert_eq!(row.delta_pct, None);
    assert_eq!(pivot.row("select_only", 10).unwrap().delta_pct, Some(47.5));
}

#[test]
fn test_canonical_statistics() {
    let (_dir, a, b) = write_pair(&fixtures::baseline_csv(), &fixtures::candidate_csv());
    let stats = aggregate(&load_pair(&a, &b).unwrap());

    assert_eq!(stats.len(), 8);
    assert_eq!(stats.suites(), ["select_only", "tpcb"]);
    let row = stats.get(fixtures::BASELINE, "select_only", 10).unwrap();
    assert_eq!(row.tps.mean, 1010.0);
    assert_eq!(row.run_count, 2);
    let row = stats.get(fixtures::CANDIDATE, "select_only", 10).unwrap();
    assert_eq!(row.tps.mean, 1490.0);
}
