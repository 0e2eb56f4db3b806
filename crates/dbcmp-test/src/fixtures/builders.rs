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

//! Fluent builder for benchmark result files.

use super::HEADER;

/// Builder for result CSV text in the runner's column order.
///
/// # Examples
///
/// ```
/// use dbcmp_test::fixtures::builders::ResultsCsv;
///
/// let csv = ResultsCsv::new()
///     .row("postgresql", "tpcb", 10, 1, 640.0, 15.6)
///     .build();
///
/// assert_eq!(
///     csv,
///     "Database_Type,Suite,Clients,Run,TPS,Latency_Avg_ms\n\
///      postgresql,tpcb,10,1,640,15.6\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ResultsCsv {
    header: String,
    lines: Vec<String>,
}

impl Default for ResultsCsv {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsCsv {
    /// Starts a file with the standard header.
    pub fn new() -> Self {
        Self {
            header: HEADER.to_string(),
            lines: Vec::new(),
        }
    }

    /// Replaces the header line (without trailing newline).
    pub fn header(mut self, header: &str) -> Self {
        self.header = format!("{header}\n");
        self
    }

    /// Adds a well-formed row.
    pub fn row(
        self,
        engine: &str,
        suite: &str,
        clients: u32,
        run: u32,
        tps: f64,
        latency_ms: f64,
    ) -> Self {
        self.raw_row(
            engine,
            suite,
            &clients.to_string(),
            &run.to_string(),
            &tps.to_string(),
            &latency_ms.to_string(),
        )
    }

    /// Adds a row from raw field text, for malformed values.
    pub fn raw_row(
        self,
        engine: &str,
        suite: &str,
        clients: &str,
        run: &str,
        tps: &str,
        latency_ms: &str,
    ) -> Self {
        self.line(&[engine, suite, clients, run, tps, latency_ms].join(","))
    }

    /// Adds an arbitrary line (without trailing newline).
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Number of data lines added so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no data lines were added.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the CSV text.
    pub fn build(&self) -> String {
        let mut out = self.header.clone();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
