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

//! Engine-by-configuration pivot tables.
//!
//! A pivot lays one metric's group means out with engines as columns and
//! (workload, client count) as rows, then appends the candidate's relative
//! difference against the baseline when both engines have a column.

use crate::aggregate::StatisticsTable;
use crate::engine::Comparison;
use crate::metric::Metric;
use crate::parse::{percent_change, round_to};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Placeholder rendered for absent cells.
pub const ABSENT_CELL: &str = "-";

/// Decimal places of the relative-difference column.
pub const DELTA_PRECISION: u32 = 1;

/// One (workload, client count) row of a pivot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    /// Workload suite.
    pub suite: String,
    /// Concurrent clients.
    pub clients: u32,
    /// Rounded mean per engine column, `None` when the engine has no group.
    pub cells: Vec<Option<f64>>,
    /// Candidate vs baseline change in percent.
    pub delta_pct: Option<f64>,
}

/// One metric pivoted by engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotTable {
    /// Metric held in the cells.
    pub metric: Metric,
    /// Engine columns, sorted by identifier.
    pub engines: Vec<String>,
    /// Header of the relative-difference column, present only when both
    /// compared engines have a column.
    pub delta_column: Option<String>,
    /// Rows sorted by workload then client count.
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Pivots the group means of `metric`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbcmp_core::{aggregate, BenchmarkRecord, Comparison, Dataset, Metric, PivotTable};
    ///
    /// let dataset = Dataset::new(vec![
    ///     BenchmarkRecord::new("postgresql", "select_only", 10, 1, 1000.0, 9.9),
    ///     BenchmarkRecord::new("postgresql", "select_only", 10, 2, 1020.0, 9.7),
    ///     BenchmarkRecord::new("citus", "select_only", 10, 1, 1500.0, 6.6),
    ///     BenchmarkRecord::new("citus", "select_only", 10, 2, 1480.0, 6.8),
    /// ]);
    /// let stats = aggregate(&dataset);
    /// let pivot = PivotTable::build(&stats, Metric::Throughput, &Comparison::default());
    ///
    /// assert_eq!(pivot.cell("select_only", 10, "postgresql"), Some(1010.0));
    /// assert_eq!(pivot.cell("select_only", 10, "citus"), Some(1490.0));
    /// assert_eq!(pivot.rows[0].delta_pct, Some(47.5));
    /// ```
    pub fn build(stats: &StatisticsTable, metric: Metric, comparison: &Comparison) -> Self {
        let engines: Vec<String> = stats.engines().into_iter().map(str::to_string).collect();
        let precision = metric.pivot_precision();

        let mut grid: BTreeMap<(&str, u32), Vec<Option<f64>>> = BTreeMap::new();
        for stat in stats.rows() {
            let Some(column) = engines.iter().position(|e| *e == stat.key.engine) else {
                continue;
            };
            let cells = grid
                .entry((stat.key.suite.as_str(), stat.key.clients))
                .or_insert_with(|| vec![None; engines.len()]);
            cells[column] = Some(round_to(metric.summary(stat).mean, precision));
        }

        let baseline = engines.iter().position(|e| *e == comparison.baseline.key);
        let candidate = engines.iter().position(|e| *e == comparison.candidate.key);
        let compared = baseline.zip(candidate);

        let rows = grid
            .into_iter()
            .map(|((suite, clients), cells)| {
                let delta_pct = compared
                    .and_then(|(b, c)| Some((cells[b]?, cells[c]?)))
                    .and_then(|(b, c)| percent_change(b, c))
                    .map(|pct| round_to(pct, DELTA_PRECISION));
                PivotRow {
                    suite: suite.to_string(),
                    clients,
                    cells,
                    delta_pct,
                }
            })
            .collect();

        Self {
            metric,
            engines,
            delta_column: compared.map(|_| comparison.delta_column()),
            rows,
        }
    }

    /// Index of an engine column.
    pub fn column(&self, engine: &str) -> Option<usize> {
        self.engines.iter().position(|e| e == engine)
    }

    /// Row for a configuration.
    pub fn row(&self, suite: &str, clients: u32) -> Option<&PivotRow> {
        self.rows
            .iter()
            .find(|r| r.suite == suite && r.clients == clients)
    }

    /// Rounded mean for one configuration and engine.
    pub fn cell(&self, suite: &str, clients: u32, engine: &str) -> Option<f64> {
        let column = self.column(engine)?;
        self.row(suite, clients)?.cells[column]
    }

    /// Whether the relative-difference column exists.
    pub fn has_delta(&self) -> bool {
        self.delta_column.is_some()
    }

    /// Mean of the present cells of an engine column.
    ///
    /// `None` when the column is missing or entirely empty.
    pub fn column_mean(&self, engine: &str) -> Option<f64> {
        let column = self.column(engine)?;
        let values: Vec<f64> = self.rows.iter().filter_map(|r| r.cells[column]).collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Renders the pivot as an aligned plain-text table.
    ///
    /// Absent cells are shown as [`ABSENT_CELL`].
    pub fn render_text(&self) -> String {
        let precision = self.metric.pivot_precision() as usize;

        let mut header = vec!["Suite".to_string(), "Clients".to_string()];
        header.extend(self.engines.iter().cloned());
        if let Some(delta) = &self.delta_column {
            header.push(delta.clone());
        }

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                let mut line = vec![row.suite.clone(), row.clients.to_string()];
                line.extend(row.cells.iter().map(|cell| format_cell(*cell, precision)));
                if self.has_delta() {
                    line.push(format_cell(row.delta_pct, DELTA_PRECISION as usize));
                }
                line
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for line in &body {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        write_line(&mut out, &header, &widths);
        for line in &body {
            write_line(&mut out, line, &widths);
        }
        if body.is_empty() {
            out.push_str("(no data)\n");
        }
        out
    }
}

fn format_cell(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| ABSENT_CELL.to_string())
}

/// First column left-aligned, the rest right-aligned.
fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if idx == 0 {
            let _ = write!(line, "{:<width$}", cell, width = width);
        } else {
            let _ = write!(line, "  {:>width$}", cell, width = width);
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
