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

//! Benchmark result rows.

use crate::parse::{coerce_count, coerce_numeric};
use serde::{Deserialize, Serialize};

/// Column holding the engine identifier (`postgresql`, `citus`).
pub const COL_ENGINE: &str = "Database_Type";
/// Column holding the workload suite name.
pub const COL_SUITE: &str = "Suite";
/// Column holding the concurrent client count.
pub const COL_CLIENTS: &str = "Clients";
/// Column holding the run index within a configuration.
pub const COL_RUN: &str = "Run";
/// Column holding throughput in transactions per second.
pub const COL_TPS: &str = "TPS";
/// Column holding average latency in milliseconds.
pub const COL_LATENCY: &str = "Latency_Avg_ms";

/// Columns every result file must carry, as emitted by the benchmark runner.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_ENGINE,
    COL_SUITE,
    COL_CLIENTS,
    COL_RUN,
    COL_TPS,
    COL_LATENCY,
];

/// One benchmark execution.
///
/// Throughput and latency are always present; rows lacking either never make
/// it past the loader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    /// Engine identifier as written by the runner.
    pub engine: String,
    /// Workload suite name.
    pub suite: String,
    /// Concurrent clients, absent if the field was not a whole number.
    pub clients: Option<u32>,
    /// Run index within the configuration.
    pub run: Option<u32>,
    /// Transactions per second.
    pub tps: f64,
    /// Average latency in milliseconds.
    pub latency_ms: f64,
}

impl BenchmarkRecord {
    /// Creates a fully populated record.
    pub fn new(
        engine: impl Into<String>,
        suite: impl Into<String>,
        clients: u32,
        run: u32,
        tps: f64,
        latency_ms: f64,
    ) -> Self {
        Self {
            engine: engine.into(),
            suite: suite.into(),
            clients: Some(clients),
            run: Some(run),
            tps,
            latency_ms,
        }
    }
}

/// A CSV row before numeric coercion.
///
/// Every field is optional so that short rows deserialize instead of failing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "Database_Type", default)]
    engine: Option<String>,
    #[serde(rename = "Suite", default)]
    suite: Option<String>,
    #[serde(rename = "Clients", default)]
    clients: Option<String>,
    #[serde(rename = "Run", default)]
    run: Option<String>,
    #[serde(rename = "TPS", default)]
    tps: Option<String>,
    #[serde(rename = "Latency_Avg_ms", default)]
    latency_ms: Option<String>,
}

impl RawRecord {
    /// Coerces the numeric columns, returning `None` when throughput or
    /// latency is unusable.
    pub(crate) fn into_record(self) -> Option<BenchmarkRecord> {
        let tps = self.tps.as_deref().and_then(coerce_numeric)?;
        let latency_ms = self.latency_ms.as_deref().and_then(coerce_numeric)?;

        Some(BenchmarkRecord {
            engine: self.engine.unwrap_or_default(),
            suite: self.suite.unwrap_or_default(),
            clients: self.clients.as_deref().and_then(coerce_count),
            run: self.run.as_deref().and_then(coerce_count),
            tps,
            latency_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(tps: &str, latency: &str, clients: &str) -> RawRecord {
        RawRecord {
            engine: Some("postgresql".to_string()),
            suite: Some("tpcb".to_string()),
            clients: Some(clients.to_string()),
            run: Some("1".to_string()),
            tps: Some(tps.to_string()),
            latency_ms: Some(latency.to_string()),
        }
    }

    #[test]
    fn test_valid_row_is_kept() {
        let record = raw("812.4", "12.31", "10").into_record().unwrap();
        assert_eq!(record.engine, "postgresql");
        assert_eq!(record.clients, Some(10));
        assert_eq!(record.run, Some(1));
        assert_eq!(record.tps, 812.4);
        assert_eq!(record.latency_ms, 12.31);
    }

    #[test]
    fn test_bad_throughput_or_latency_drops_row() {
        assert!(raw("N/A", "12.31", "10").into_record().is_none());
        assert!(raw("812.4", "", "10").into_record().is_none());
    }

    #[test]
    fn test_bad_clients_keeps_row_without_clients() {
        let record = raw("812.4", "12.31", "ten").into_record().unwrap();
        assert_eq!(record.clients, None);
    }

    #[test]
    fn test_empty_raw_record_is_dropped() {
        assert!(RawRecord::default().into_record().is_none());
    }
}
