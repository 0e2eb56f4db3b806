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

//! Text summary and HTML index for a benchmark comparison.
//!
//! [`SummaryReport`] pivots the aggregated statistics into throughput and
//! latency tables followed by a short head-to-head analysis and is saved as
//! `performance_summary.txt`. [`IndexPage`] ties the charts and the summary
//! together in a static `index.html`.

#![warn(missing_docs)]

pub mod error;
pub mod html;
pub mod summary;

pub use error::{ReportError, Result};
pub use html::{escape_html, write_index, ChartSection, IndexPage, INDEX_FILE};
pub use summary::{write_summary, EngineAverages, SummaryReport, Verdict, SUMMARY_FILE};
