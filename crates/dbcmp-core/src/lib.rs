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

//! Benchmark result loading, aggregation and pivoting.
//!
//! This crate holds the data side of the comparison pipeline: it reads the two
//! CSV result sets produced by the upstream benchmark runner, turns them into a
//! combined [`Dataset`], groups the runs into a [`StatisticsTable`] and reshapes
//! those statistics into per-metric [`PivotTable`]s.
//!
//! # Pipeline
//!
//! ```text
//! baseline.csv ─┐
//!               ├─ load_pair ─▶ Dataset ─ aggregate ─▶ StatisticsTable ─ PivotTable::build
//! candidate.csv ┘
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use dbcmp_core::{aggregate, load_pair, Comparison, Metric, PivotTable};
//! use std::path::Path;
//!
//! # fn main() -> dbcmp_core::Result<()> {
//! let dataset = load_pair(
//!     Path::new("postgre/benchmark_results.csv"),
//!     Path::new("citus/benchmark_results.csv"),
//! )?;
//! let stats = aggregate(&dataset);
//! let tps = PivotTable::build(&stats, Metric::Throughput, &Comparison::default());
//! println!("{}", tps.render_text());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod loader;
pub mod metric;
pub mod parse;
pub mod pivot;
pub mod record;

pub use aggregate::{aggregate, AggregatedStatistic, GroupKey, MetricSummary, StatisticsTable};
pub use dataset::Dataset;
pub use engine::{Comparison, Engine};
pub use error::{CoreError, Result};
pub use loader::{load_pair, load_records, load_records_from_reader, LoadedTable};
pub use metric::Metric;
pub use parse::{coerce_count, coerce_numeric, percent_change, round_to};
pub use pivot::{PivotRow, PivotTable};
pub use record::{BenchmarkRecord, REQUIRED_COLUMNS};
