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

//! The end-to-end comparison pipeline.

use crate::config::AnalyzerConfig;
use crate::error::{CliError, Result};
use chrono::{Local, NaiveDateTime};
use dbcmp_charts::{render_all, ChartArtifacts};
use dbcmp_core::{aggregate, load_pair};
use dbcmp_report::{write_index, write_summary, IndexPage, SummaryReport};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Files produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutput {
    /// Directory holding every artifact.
    pub output_dir: PathBuf,
    /// Rendered charts.
    pub charts: ChartArtifacts,
    /// Text summary.
    pub summary: PathBuf,
    /// HTML index.
    pub index: PathBuf,
    /// Records that survived validation.
    pub records: usize,
    /// Aggregated (engine, workload, clients) groups.
    pub groups: usize,
}

/// Runs load, aggregate, chart and report stages in order.
///
/// Each stage finishes writing before the next starts; the first failure
/// aborts the run.
#[derive(Debug, Clone)]
pub struct BenchmarkAnalyzer {
    config: AnalyzerConfig,
}

impl BenchmarkAnalyzer {
    /// Creates an analyzer for `config`.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs the pipeline stamped with the current local time.
    pub fn run(&self) -> Result<AnalysisOutput> {
        self.run_at(Local::now().naive_local())
    }

    /// Runs the pipeline stamped with `generated_at`.
    pub fn run_at(&self, generated_at: NaiveDateTime) -> Result<AnalysisOutput> {
        let config = &self.config;
        info!(
            base_dir = %config.base_dir.display(),
            output_dir = %config.output_dir.display(),
            "benchmark analyzer initialized"
        );

        fs::create_dir_all(&config.output_dir)
            .map_err(|e| CliError::output_dir(&config.output_dir, e))?;

        let dataset = load_pair(&config.baseline.csv, &config.candidate.csv)?;

        let stats = aggregate(&dataset);
        info!(groups = stats.len(), "calculated statistics");

        let comparison = config.comparison();
        let charts = render_all(&stats, &comparison, &config.style, &config.output_dir)?;

        let report = SummaryReport::build(&stats, &comparison, generated_at);
        debug!(verdict = ?report.verdict, "built summary");
        let summary = write_summary(&report, &config.output_dir)?;

        let page = IndexPage::new(&comparison, &charts, generated_at);
        let index = write_index(&page, &config.output_dir)?;

        Ok(AnalysisOutput {
            output_dir: config.output_dir.clone(),
            charts,
            summary,
            index,
            records: dataset.len(),
            groups: stats.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BASELINE_DIR, CANDIDATE_DIR, RESULTS_PATH};
    use chrono::NaiveDate;
    use dbcmp_core::CoreError;
    use dbcmp_test::{fixtures, write_fixture};
    use std::path::Path;
    use tempfile::TempDir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap()
    }

    fn seed(base: &Path, candidate: &str) {
        let rel = |dir: &str| Path::new(dir).join(RESULTS_PATH);
        write_fixture(base, &rel(BASELINE_DIR), &fixtures::baseline_csv()).unwrap();
        write_fixture(base, &rel(CANDIDATE_DIR), candidate).unwrap();
    }

    #[test]
    fn test_run_writes_all_artifacts() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), &fixtures::candidate_csv());

        let output = BenchmarkAnalyzer::new(AnalyzerConfig::new(dir.path())).run_at(at()).unwrap();

        assert_eq!(output.output_dir, dir.path().join("comparison_charts"));
        assert_eq!(output.records, 16);
        assert_eq!(output.groups, 8);
        for path in [
            &output.charts.throughput,
            &output.charts.latency,
            &output.charts.tradeoff,
            &output.summary,
            &output.index,
        ] {
            assert!(path.is_file(), "{} missing", path.display());
            assert!(path.starts_with(&output.output_dir));
        }
    }

    #[test]
    fn test_missing_input_fails_before_artifacts() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        write_fixture(base, &Path::new(BASELINE_DIR).join(RESULTS_PATH), &fixtures::baseline_csv()).unwrap();

        let err = BenchmarkAnalyzer::new(AnalyzerConfig::new(base)).run_at(at()).unwrap_err();

        assert!(matches!(err, CliError::Core(CoreError::MissingInput { .. })));
        assert!(!base.join("comparison_charts/performance_summary.txt").exists());
    }

    #[test]
    fn test_nested_output_directory_is_created() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), &fixtures::candidate_csv());
        let out = dir.path().join("reports/2025/run1");

        let config = AnalyzerConfig::new(dir.path()).with_output_dir(&out);
        let output = BenchmarkAnalyzer::new(config).run_at(at()).unwrap();

        assert_eq!(output.index, out.join("index.html"));
    }
}
