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

//! Summary report tests over the shared result fixtures.

use chrono::{NaiveDate, NaiveDateTime};
use dbcmp_core::{aggregate, load_pair, Comparison, StatisticsTable};
use dbcmp_report::{write_summary, SummaryReport, SUMMARY_FILE};
use dbcmp_test::{fixtures, write_fixture};
use std::fs;
use tempfile::TempDir;

fn at(second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(9, 26, second)
        .unwrap()
}

fn stats_for(dir: &TempDir, candidate: &str) -> StatisticsTable {
    let a = write_fixture(dir.path(), "postgre/results.csv", &fixtures::baseline_csv()).unwrap();
    let b = write_fixture(dir.path(), "citus/results.csv", candidate).unwrap();
    aggregate(&load_pair(&a, &b).unwrap())
}

fn without_timestamp(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with("Generated on:"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_canonical_report_sections() {
    let dir = TempDir::new().unwrap();
    let stats = stats_for(&dir, &fixtures::candidate_csv());
    let text = SummaryReport::build(&stats, &Comparison::default(), at(0)).render();

    assert!(text.contains("PERFORMANCE COMPARISON SUMMARY"));
    assert!(text.contains("Generated on: 2025-03-14 09:26:00"));
    assert!(text.contains("📊 THROUGHPUT (TPS - Transactions Per Second)"));
    assert!(text.contains("⏱️  LATENCY (ms - Milliseconds)"));
    assert!(text.contains("Citus_vs_PostgreSQL_%"));
    assert!(text.contains("47.5"));
    assert!(text.contains("Average PostgreSQL TPS:"));
    assert!(text.contains("Average Citus Latency:"));
    assert!(text.contains("TPS Difference:"));
    assert!(text.contains("shows higher average throughput"));
    assert!(text.contains("shows lower average latency"));
}

#[test]
fn test_canonical_verdict() {
    let dir = TempDir::new().unwrap();
    let stats = stats_for(&dir, &fixtures::candidate_csv());
    let report = SummaryReport::build(&stats, &Comparison::default(), at(0));

    // Mean of the four TPS cells: 1790.0 for PostgreSQL and 2450.0 for Citus.
    assert_eq!(report.averages[0].tps, Some(1790.0));
    assert_eq!(report.averages[1].tps, Some(2450.0));
    let verdict = report.verdict.as_ref().unwrap();
    assert_eq!(verdict.throughput_leader, "Citus");
    assert_eq!(verdict.latency_leader, "Citus");
    assert!(report.render().contains("TPS Difference: 36.9%"));
}

#[test]
fn test_single_engine_report() {
    let dir = TempDir::new().unwrap();
    let stats = stats_for(&dir, &fixtures::header_only_csv());
    let report = SummaryReport::build(&stats, &Comparison::default(), at(0));
    let text = report.render();

    assert!(report.verdict.is_none());
    assert!(text.contains("Average PostgreSQL TPS: 1790.0"));
    assert!(!text.contains("Citus TPS"));
    assert!(!text.contains("Difference"));
    assert!(text.contains("Only PostgreSQL results are available; comparison skipped."));
}

#[test]
fn test_missing_workload_renders_absent_cell() {
    let dir = TempDir::new().unwrap();
    let stats = stats_for(&dir, &fixtures::candidate_without_tpcb_csv());
    let text = SummaryReport::build(&stats, &Comparison::default(), at(0)).render();

    let tpcb_line = text.lines().find(|line| line.starts_with("tpcb")).unwrap();
    assert!(tpcb_line.contains(" - "));
}

#[test]
fn test_report_is_idempotent_apart_from_timestamp() {
    let dir = TempDir::new().unwrap();
    let stats = stats_for(&dir, &fixtures::candidate_csv());
    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");
    fs::create_dir_all(&out_a).unwrap();
    fs::create_dir_all(&out_b).unwrap();

    let first = SummaryReport::build(&stats, &Comparison::default(), at(1));
    let second = SummaryReport::build(&stats, &Comparison::default(), at(2));
    let path_a = write_summary(&first, &out_a).unwrap();
    let path_b = write_summary(&second, &out_b).unwrap();

    assert_eq!(path_a, out_a.join(SUMMARY_FILE));
    let text_a = fs::read_to_string(path_a).unwrap();
    let text_b = fs::read_to_string(path_b).unwrap();
    assert_ne!(text_a, text_b);
    assert_eq!(without_timestamp(&text_a), without_timestamp(&text_b));
    assert_eq!(first.throughput, second.throughput);
}
