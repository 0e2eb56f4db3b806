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

//! Plain-text performance summary.

use crate::error::{ReportError, Result};
use chrono::NaiveDateTime;
use dbcmp_core::{percent_change, Comparison, Engine, Metric, PivotTable, StatisticsTable};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the text report.
pub const SUMMARY_FILE: &str = "performance_summary.txt";

/// Timestamp format of the `Generated on:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const BANNER_WIDTH: usize = 63;
const RULE_WIDTH: usize = 60;

/// Grand means of one engine's pivot columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineAverages {
    /// Display label.
    pub label: String,
    /// Mean of the throughput column.
    pub tps: Option<f64>,
    /// Mean of the latency column.
    pub latency: Option<f64>,
}

impl EngineAverages {
    fn of(engine: &Engine, throughput: &PivotTable, latency: &PivotTable) -> Self {
        Self {
            label: engine.label.clone(),
            tps: throughput.column_mean(&engine.key),
            latency: latency.column_mean(&engine.key),
        }
    }
}

/// Head-to-head outcome when both engines have results.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Candidate versus baseline mean TPS, in percent.
    pub tps_diff_pct: Option<f64>,
    /// Candidate versus baseline mean latency, in percent.
    pub latency_diff_pct: Option<f64>,
    /// Engine with the higher mean TPS; ties go to the baseline.
    pub throughput_leader: String,
    /// Engine with the lower mean latency; ties go to the baseline.
    pub latency_leader: String,
}

/// The complete text report.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// `"Baseline vs Candidate"`.
    pub title: String,
    /// Generation time.
    pub generated_at: NaiveDateTime,
    /// Throughput pivot.
    pub throughput: PivotTable,
    /// Latency pivot.
    pub latency: PivotTable,
    /// Averages of every engine with results, baseline first.
    pub averages: Vec<EngineAverages>,
    /// Present only when both engines have results.
    pub verdict: Option<Verdict>,
    /// Identifiers of the compared engines, baseline first.
    pub expected: Vec<String>,
    /// Engine identifiers with results that match neither compared engine.
    pub unmatched: Vec<String>,
}

impl SummaryReport {
    /// Builds the report from aggregated statistics.
    pub fn build(stats: &StatisticsTable, comparison: &Comparison, generated_at: NaiveDateTime) -> Self {
        let throughput = PivotTable::build(stats, Metric::Throughput, comparison);
        let latency = PivotTable::build(stats, Metric::Latency, comparison);

        let averages: Vec<EngineAverages> = comparison
            .engines()
            .into_iter()
            .filter(|engine| throughput.column(&engine.key).is_some())
            .map(|engine| EngineAverages::of(engine, &throughput, &latency))
            .collect();

        let expected: Vec<String> = comparison.engines().iter().map(|e| e.key.clone()).collect();
        let unmatched: Vec<String> = throughput
            .engines
            .iter()
            .filter(|key| !expected.contains(*key))
            .cloned()
            .collect();
        if !unmatched.is_empty() {
            warn!(
                unmatched = %unmatched.join(", "),
                expected = %expected.join(", "),
                "results for engines outside the comparison"
            );
        }

        let verdict = match averages.as_slice() {
            [base, cand] if throughput.has_delta() => Some(compare(base, cand)),
            _ => None,
        };

        Self {
            title: comparison.title(),
            generated_at,
            throughput,
            latency,
            averages,
            verdict,
            expected,
            unmatched,
        }
    }

    /// The `Generated on:` line.
    pub fn timestamp_line(&self) -> String {
        format!("Generated on: {}", self.generated_at.format(TIMESTAMP_FORMAT))
    }

    /// Renders the full report text.
    pub fn render(&self) -> String {
        let banner = "═".repeat(BANNER_WIDTH);
        let rule = "─".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("{banner}\n"));
        for heading in ["PERFORMANCE COMPARISON SUMMARY", self.title.as_str()] {
            out.push_str(format!("{:^width$}", heading, width = BANNER_WIDTH).trim_end());
            out.push('\n');
        }
        out.push_str(&format!("{banner}\n\n"));
        out.push_str(&format!("{}\n\n", self.timestamp_line()));

        for pivot in [&self.throughput, &self.latency] {
            out.push_str(&format!("{}{}\n{rule}\n", section_icon(pivot.metric), pivot.metric.heading()));
            out.push_str(&pivot.render_text());
            out.push('\n');
        }

        out.push_str(&format!("📈 SUMMARY ANALYSIS\n{rule}\n"));
        self.render_analysis(&mut out);
        out
    }

    fn render_analysis(&self, out: &mut String) {
        if !self.unmatched.is_empty() {
            out.push_str(&format!(
                "Engines not compared: {} (expected {}).\n\n",
                self.unmatched.join(", "),
                self.expected.join(", ")
            ));
        }
        if self.averages.is_empty() {
            out.push_str("No benchmark results available; comparison skipped.\n");
            return;
        }

        for avg in &self.averages {
            if let Some(tps) = avg.tps {
                out.push_str(&format!("Average {} TPS: {:.1}\n", avg.label, tps));
            }
        }
        if let Some(diff) = self.verdict.as_ref().and_then(|v| v.tps_diff_pct) {
            out.push_str(&format!("TPS Difference: {:.1}%\n", diff));
        }
        out.push('\n');

        for avg in &self.averages {
            if let Some(latency) = avg.latency {
                out.push_str(&format!("Average {} Latency: {:.2} ms\n", avg.label, latency));
            }
        }
        if let Some(diff) = self.verdict.as_ref().and_then(|v| v.latency_diff_pct) {
            out.push_str(&format!("Latency Difference: {:.1}%\n", diff));
        }
        out.push('\n');

        match &self.verdict {
            Some(verdict) => {
                out.push_str(&format!("🏆 {} shows higher average throughput\n", verdict.throughput_leader));
                out.push_str(&format!("⚡ {} shows lower average latency\n", verdict.latency_leader));
            }
            None => {
                let labels: Vec<&str> = self.averages.iter().map(|a| a.label.as_str()).collect();
                out.push_str(&format!(
                    "Only {} results are available; comparison skipped.\n",
                    labels.join(", ")
                ));
            }
        }
    }
}

fn compare(base: &EngineAverages, cand: &EngineAverages) -> Verdict {
    let diff = |a: Option<f64>, b: Option<f64>| a.zip(b).and_then(|(a, b)| percent_change(a, b));

    let throughput_leader = match (base.tps, cand.tps) {
        (Some(b), Some(c)) if c > b => &cand.label,
        _ => &base.label,
    };
    let latency_leader = match (base.latency, cand.latency) {
        (Some(b), Some(c)) if c < b => &cand.label,
        _ => &base.label,
    };

    Verdict {
        tps_diff_pct: diff(base.tps, cand.tps),
        latency_diff_pct: diff(base.latency, cand.latency),
        throughput_leader: throughput_leader.clone(),
        latency_leader: latency_leader.clone(),
    }
}

fn section_icon(metric: Metric) -> &'static str {
    match metric {
        Metric::Throughput => "📊 ",
        Metric::Latency => "⏱️  ",
    }
}

/// Writes `report` to [`SUMMARY_FILE`] inside `dir`.
pub fn write_summary(report: &SummaryReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(SUMMARY_FILE);
    fs::write(&path, report.render()).map_err(|e| ReportError::io(&path, e))?;
    info!(path = %path.display(), "saved summary table");
    Ok(path)
}
