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

//! Canonical benchmark result files.
//!
//! - **baseline / candidate**: PostgreSQL and Citus runs over two workloads
//! - **single-engine**: a workload measured by only one engine
//! - **errors**: malformed files and rows
//! - **builders**: fluent construction of custom result files

pub mod builders;
pub mod errors;

use builders::ResultsCsv;

/// Header written by the benchmark runner.
pub const HEADER: &str = "Database_Type,Suite,Clients,Run,TPS,Latency_Avg_ms\n";

/// Baseline engine identifier used by the fixtures.
pub const BASELINE: &str = "postgresql";

/// Candidate engine identifier used by the fixtures.
pub const CANDIDATE: &str = "citus";

/// PostgreSQL results: `select_only` and `tpcb` at 10 and 50 clients, two runs each.
pub fn baseline_csv() -> String {
    ResultsCsv::new()
        .row(BASELINE, "select_only", 10, 1, 1000.0, 10.0)
        .row(BASELINE, "select_only", 10, 2, 1020.0, 9.8)
        .row(BASELINE, "select_only", 50, 1, 4100.0, 12.2)
        .row(BASELINE, "select_only", 50, 2, 3900.0, 12.8)
        .row(BASELINE, "tpcb", 10, 1, 640.0, 15.6)
        .row(BASELINE, "tpcb", 10, 2, 660.0, 15.2)
        .row(BASELINE, "tpcb", 50, 1, 1480.0, 33.8)
        .row(BASELINE, "tpcb", 50, 2, 1520.0, 32.9)
        .build()
}

/// Citus results for the same configurations as [`baseline_csv`].
pub fn candidate_csv() -> String {
    ResultsCsv::new()
        .row(CANDIDATE, "select_only", 10, 1, 1500.0, 6.6)
        .row(CANDIDATE, "select_only", 10, 2, 1480.0, 6.8)
        .row(CANDIDATE, "select_only", 50, 1, 6000.0, 8.3)
        .row(CANDIDATE, "select_only", 50, 2, 6200.0, 8.1)
        .row(CANDIDATE, "tpcb", 10, 1, 520.0, 19.2)
        .row(CANDIDATE, "tpcb", 10, 2, 540.0, 18.5)
        .row(CANDIDATE, "tpcb", 50, 1, 1700.0, 29.4)
        .row(CANDIDATE, "tpcb", 50, 2, 1660.0, 30.1)
        .build()
}

/// Candidate results that omit the `tpcb` workload entirely.
pub fn candidate_without_tpcb_csv() -> String {
    ResultsCsv::new()
        .row(CANDIDATE, "select_only", 10, 1, 1500.0, 6.6)
        .row(CANDIDATE, "select_only", 10, 2, 1480.0, 6.8)
        .build()
}

/// Three workloads with a single run each, for layout tests.
pub fn three_workload_csv(engine: &str) -> String {
    ResultsCsv::new()
        .row(engine, "select_only", 10, 1, 1500.0, 6.6)
        .row(engine, "simple_update", 10, 1, 700.0, 14.1)
        .row(engine, "tpcb", 10, 1, 600.0, 16.4)
        .build()
}

/// A result file with a header and no data rows.
pub fn header_only_csv() -> String {
    HEADER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_fixtures_have_matching_configurations() {
        let key = |line: &str| {
            let fields: Vec<&str> = line.split(',').collect();
            (fields[1].to_string(), fields[2].to_string(), fields[3].to_string())
        };
        let baseline: Vec<_> = baseline_csv().lines().skip(1).map(key).collect();
        let candidate: Vec<_> = candidate_csv().lines().skip(1).map(key).collect();
        assert_eq!(baseline, candidate);
    }

    #[test]
    fn test_header_only() {
        assert_eq!(header_only_csv().lines().count(), 1);
    }
}
