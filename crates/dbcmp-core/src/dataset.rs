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

//! The combined result table.

use crate::record::BenchmarkRecord;
use std::collections::BTreeSet;

/// Benchmark records from both engines, baseline rows first.
///
/// Every record carries numeric throughput and latency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<BenchmarkRecord>,
}

impl Dataset {
    /// Wraps already-validated records, keeping their order.
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    /// Concatenates record sets in the given order.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Vec<BenchmarkRecord>>,
    {
        Self {
            records: parts.into_iter().flatten().collect(),
        }
    }

    /// All records in load order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no usable rows were loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct workload names, sorted.
    pub fn suites(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.suite.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct client counts, sorted. Records without a count are skipped.
    pub fn client_counts(&self) -> Vec<u32> {
        self.records
            .iter()
            .filter_map(|r| r.clients)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct engine identifiers, sorted.
    pub fn engines(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.engine.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of records for one engine.
    pub fn count_for(&self, engine: &str) -> usize {
        self.records.iter().filter(|r| r.engine == engine).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(engine: &str, suite: &str, clients: u32) -> BenchmarkRecord {
        BenchmarkRecord::new(engine, suite, clients, 1, 100.0, 1.0)
    }

    #[test]
    fn test_concat_preserves_order() {
        let dataset = Dataset::concat([
            vec![record("postgresql", "tpcb", 10), record("postgresql", "tpcb", 1)],
            vec![record("citus", "tpcb", 10)],
        ]);

        let engines: Vec<_> = dataset.records().iter().map(|r| r.engine.as_str()).collect();
        assert_eq!(engines, ["postgresql", "postgresql", "citus"]);
        assert_eq!(dataset.records()[1].clients, Some(1));
    }

    #[test]
    fn test_distinct_values_are_sorted() {
        let dataset = Dataset::new(vec![
            record("postgresql", "tpcb", 50),
            record("citus", "select_only", 10),
            record("postgresql", "select_only", 10),
        ]);

        assert_eq!(dataset.suites(), ["select_only", "tpcb"]);
        assert_eq!(dataset.client_counts(), [10, 50]);
        assert_eq!(dataset.engines(), ["citus", "postgresql"]);
        assert_eq!(dataset.count_for("postgresql"), 2);
        assert_eq!(dataset.count_for("mysql"), 0);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.suites().is_empty());
    }
}
