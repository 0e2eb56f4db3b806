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

//! Grouping of benchmark runs into per-configuration statistics.
//!
//! Runs are grouped by (engine, workload, client count). Standard deviation
//! is the sample deviation (n − 1 denominator); a configuration measured once
//! has a deviation of exactly zero.

use crate::dataset::Dataset;
use crate::record::BenchmarkRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Identity of one benchmark configuration.
///
/// The derived ordering (engine, suite, clients) is the output order of
/// [`aggregate`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    /// Engine identifier.
    pub engine: String,
    /// Workload suite.
    pub suite: String,
    /// Concurrent clients.
    pub clients: u32,
}

impl GroupKey {
    /// The group a record belongs to, if it has a client count.
    pub fn of(record: &BenchmarkRecord) -> Option<Self> {
        Some(Self {
            engine: record.engine.clone(),
            suite: record.suite.clone(),
            clients: record.clients?,
        })
    }
}

/// Mean, deviation and range of one metric within a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation, zero for a single sample.
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl MetricSummary {
    /// Summarizes a non-empty sample set.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbcmp_core::MetricSummary;
    ///
    /// let summary = MetricSummary::from_samples(&[1000.0, 1020.0]).unwrap();
    /// assert_eq!(summary.mean, 1010.0);
    /// assert_eq!(summary.min, 1000.0);
    /// assert_eq!(summary.max, 1020.0);
    ///
    /// let single = MetricSummary::from_samples(&[5.0]).unwrap();
    /// assert_eq!(single.std_dev, 0.0);
    ///
    /// assert!(MetricSummary::from_samples(&[]).is_none());
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let first = *samples.first()?;
        let (min, max) = samples
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let n = samples.len() as f64;
        // Summation error can push the mean of near-identical samples just
        // outside the observed range.
        let mean = (samples.iter().sum::<f64>() / n).clamp(min, max);

        let std_dev = if samples.len() > 1 {
            let variance = samples
                .iter()
                .map(|v| {
                    let diff = v - mean;
                    diff * diff
                })
                .sum::<f64>()
                / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };

        Some(Self {
            mean,
            std_dev,
            min,
            max,
        })
    }
}

/// Statistics for one benchmark configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedStatistic {
    /// Configuration identity.
    pub key: GroupKey,
    /// Throughput summary.
    pub tps: MetricSummary,
    /// Latency summary.
    pub latency: MetricSummary,
    /// Number of runs in the group, at least one.
    pub run_count: usize,
}

/// All aggregated statistics, sorted by [`GroupKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsTable {
    rows: Vec<AggregatedStatistic>,
}

impl StatisticsTable {
    /// Builds a table from statistic rows, sorting them by key.
    pub fn new(mut rows: Vec<AggregatedStatistic>) -> Self {
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        Self { rows }
    }

    /// All rows in key order.
    pub fn rows(&self) -> &[AggregatedStatistic] {
        &self.rows
    }

    /// Number of configurations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no configurations.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct workloads, sorted.
    pub fn suites(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|s| s.key.suite.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct engines, sorted.
    pub fn engines(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|s| s.key.engine.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rows of one engine within one workload, ascending by clients.
    ///
    /// Empty when the engine has no results for the workload.
    pub fn series(&self, suite: &str, engine: &str) -> Vec<&AggregatedStatistic> {
        self.rows
            .iter()
            .filter(|s| s.key.suite == suite && s.key.engine == engine)
            .collect()
    }

    /// Client counts measured for a workload by any engine, sorted.
    pub fn client_counts(&self, suite: &str) -> Vec<u32> {
        self.rows
            .iter()
            .filter(|s| s.key.suite == suite)
            .map(|s| s.key.clients)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Looks up a single configuration.
    pub fn get(&self, engine: &str, suite: &str, clients: u32) -> Option<&AggregatedStatistic> {
        self.rows.iter().find(|s| {
            s.key.engine == engine && s.key.suite == suite && s.key.clients == clients
        })
    }
}

/// Groups a dataset by (engine, workload, client count).
///
/// Records without a client count have no group and are left out.
///
/// # Examples
///
/// ```
/// use dbcmp_core::{aggregate, BenchmarkRecord, Dataset};
///
/// let dataset = Dataset::new(vec![
///     BenchmarkRecord::new("citus", "select_only", 10, 1, 1500.0, 6.6),
///     BenchmarkRecord::new("citus", "select_only", 10, 2, 1480.0, 6.8),
/// ]);
///
/// let stats = aggregate(&dataset);
/// assert_eq!(stats.len(), 1);
/// assert_eq!(stats.rows()[0].tps.mean, 1490.0);
/// assert_eq!(stats.rows()[0].run_count, 2);
/// ```
pub fn aggregate(dataset: &Dataset) -> StatisticsTable {
    let mut groups: BTreeMap<GroupKey, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    let mut ungrouped = 0usize;

    for record in dataset.records() {
        let Some(key) = GroupKey::of(record) else {
            ungrouped += 1;
            continue;
        };
        let (tps, latency) = groups.entry(key).or_default();
        tps.push(record.tps);
        latency.push(record.latency_ms);
    }

    if ungrouped > 0 {
        debug!(ungrouped, "records without a client count left out of aggregation");
    }

    let rows = groups
        .into_iter()
        .filter_map(|(key, (tps, latency))| {
            Some(AggregatedStatistic {
                run_count: tps.len(),
                tps: MetricSummary::from_samples(&tps)?,
                latency: MetricSummary::from_samples(&latency)?,
                key,
            })
        })
        .collect();

    StatisticsTable { rows }
}
