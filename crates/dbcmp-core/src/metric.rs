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

//! The two measured metrics and their presentation rules.

use crate::aggregate::{AggregatedStatistic, MetricSummary};
use serde::Serialize;

/// A measured quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    /// Transactions per second.
    Throughput,
    /// Average latency in milliseconds.
    Latency,
}

impl Metric {
    /// Both metrics in report order.
    pub const ALL: [Metric; 2] = [Metric::Throughput, Metric::Latency];

    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Throughput => "TPS",
            Metric::Latency => "Latency",
        }
    }

    /// Value-axis label.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::Throughput => "TPS (Transactions/sec)",
            Metric::Latency => "Average Latency (ms)",
        }
    }

    /// Section heading in the text report.
    pub fn heading(&self) -> &'static str {
        match self {
            Metric::Throughput => "THROUGHPUT (TPS - Transactions Per Second)",
            Metric::Latency => "LATENCY (ms - Milliseconds)",
        }
    }

    /// Decimal places kept in pivot cells.
    pub fn pivot_precision(&self) -> u32 {
        match self {
            Metric::Throughput => 1,
            Metric::Latency => 2,
        }
    }

    /// Decimal places shown on chart bar labels.
    pub fn label_precision(&self) -> usize {
        match self {
            Metric::Throughput => 0,
            Metric::Latency => 1,
        }
    }

    /// Formats a value for a chart label.
    pub fn format_label(&self, value: f64) -> String {
        format!("{:.*}", self.label_precision(), value)
    }

    /// Picks this metric's summary out of a statistic row.
    pub fn summary<'a>(&self, stat: &'a AggregatedStatistic) -> &'a MetricSummary {
        match self {
            Metric::Throughput => &stat.tps,
            Metric::Latency => &stat.latency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_shows_one_more_decimal() {
        assert_eq!(Metric::Throughput.format_label(1009.6), "1010");
        assert_eq!(Metric::Latency.format_label(9.96), "10.0");
        assert_eq!(
            Metric::Latency.label_precision(),
            Metric::Throughput.label_precision() + 1
        );
    }
}
