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

//! Property-based tests for aggregation and pivoting.
//!
//! These tests check:
//! - Every usable row lands in exactly one group
//! - Single-run groups have zero deviation
//! - Group means lie within the observed range
//! - Relative differences follow the documented formula
//! - Pivots are deterministic

use dbcmp_core::{
    aggregate, load_records_from_reader, round_to, BenchmarkRecord, Comparison, Dataset, Metric,
    PivotTable,
};
use dbcmp_test::fixtures::builders::ResultsCsv;
use proptest::prelude::*;
use std::path::Path;

// ===== Generators =====

fn engine() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("postgresql"), Just("citus")]
}

fn suite() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("select_only"), Just("simple_update"), Just("tpcb")]
}

fn clients() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(10), Just(50), Just(100)]
}

fn record() -> impl Strategy<Value = BenchmarkRecord> {
    (engine(), suite(), clients(), 1u32..10, 1.0f64..50_000.0, 0.01f64..2_000.0).prop_map(
        |(engine, suite, clients, run, tps, latency)| {
            BenchmarkRecord::new(engine, suite, clients, run, tps, latency)
        },
    )
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record(), 0..60).prop_map(Dataset::new)
}

// ===== Properties =====

proptest! {
    #[test]
    fn prop_every_row_is_grouped_once(data in dataset()) {
        let stats = aggregate(&data);
        let grouped: usize = stats.rows().iter().map(|s| s.run_count).sum();
        prop_assert_eq!(grouped, data.len());
        prop_assert!(stats.rows().iter().all(|s| s.run_count >= 1));
    }

    #[test]
    fn prop_single_run_has_zero_std(data in dataset()) {
        for stat in aggregate(&data).rows().iter().filter(|s| s.run_count == 1) {
            prop_assert_eq!(stat.tps.std_dev, 0.0);
            prop_assert_eq!(stat.latency.std_dev, 0.0);
        }
    }

    #[test]
    fn prop_mean_within_range(data in dataset()) {
        for stat in aggregate(&data).rows() {
            for summary in [&stat.tps, &stat.latency] {
                prop_assert!(summary.min <= summary.mean && summary.mean <= summary.max);
                prop_assert!(summary.std_dev >= 0.0);
            }
        }
    }

    #[test]
    fn prop_rows_sorted_by_key(data in dataset()) {
        let stats = aggregate(&data);
        prop_assert!(stats.rows().windows(2).all(|w| w[0].key < w[1].key));
    }

    #[test]
    fn prop_delta_matches_formula(data in dataset()) {
        let stats = aggregate(&data);
        let comparison = Comparison::default();
        for metric in Metric::ALL {
            let pivot = PivotTable::build(&stats, metric, &comparison);
            for row in &pivot.rows {
                let baseline = pivot.cell(&row.suite, row.clients, "postgresql");
                let candidate = pivot.cell(&row.suite, row.clients, "citus");
                match (baseline, candidate, row.delta_pct) {
                    (Some(b), Some(c), Some(delta)) => {
                        prop_assert_eq!(delta, round_to((c - b) / b * 100.0, 1));
                    }
                    (Some(b), Some(_), None) => prop_assert_eq!(b, 0.0),
                    (_, _, delta) => prop_assert!(delta.is_none()),
                }
            }
        }
    }

    #[test]
    fn prop_pivot_is_deterministic(data in dataset()) {
        let comparison = Comparison::default();
        let first = PivotTable::build(&aggregate(&data), Metric::Latency, &comparison);
        let second = PivotTable::build(&aggregate(&data.clone()), Metric::Latency, &comparison);
        prop_assert_eq!(first.render_text(), second.render_text());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_loader_keeps_only_numeric_rows(
        rows in prop::collection::vec((any::<bool>(), any::<bool>(), 1.0f64..10_000.0), 0..40)
    ) {
        let mut builder = ResultsCsv::new();
        let mut expected = 0usize;
        for (run, (tps_ok, latency_ok, value)) in rows.iter().enumerate() {
            let tps = if *tps_ok { value.to_string() } else { "error".to_string() };
            let latency = if *latency_ok { value.to_string() } else { String::new() };
            if *tps_ok && *latency_ok {
                expected += 1;
            }
            builder = builder.raw_row("citus", "tpcb", "10", &run.to_string(), &tps, &latency);
        }

        let table = load_records_from_reader(builder.build().as_bytes(), Path::new("p.csv")).unwrap();
        prop_assert_eq!(table.records.len(), expected);
        prop_assert_eq!(table.total_rows, rows.len());
        prop_assert_eq!(table.dropped_rows, rows.len() - expected);
    }
}
