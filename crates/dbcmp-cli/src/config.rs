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

//! Analyzer configuration.
//!
//! Input locations follow the benchmark runner's directory convention: each
//! engine writes its results under `<base>/<engine dir>/` at the same
//! relative path.

use dbcmp_charts::ChartStyle;
use dbcmp_core::{Comparison, Engine};
use std::path::{Path, PathBuf};

/// Directory holding the baseline engine's results.
pub const BASELINE_DIR: &str = "postgre";

/// Directory holding the candidate engine's results.
pub const CANDIDATE_DIR: &str = "citus";

/// Results file location inside an engine directory.
pub const RESULTS_PATH: &str = "benchmark_universal/latest_reports/benchmark_results.csv";

/// Default output directory name inside the base directory.
pub const OUTPUT_DIR: &str = "comparison_charts";

/// An engine and the results file it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSource {
    /// Engine identity.
    pub engine: Engine,
    /// Results CSV.
    pub csv: PathBuf,
}

impl EngineSource {
    /// Creates a source for `engine` read from `csv`.
    pub fn new(engine: Engine, csv: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            csv: csv.into(),
        }
    }

    /// The engine's results under `base_dir/engine_dir`.
    pub fn conventional(engine: Engine, base_dir: &Path, engine_dir: &str) -> Self {
        Self::new(engine, base_dir.join(engine_dir).join(RESULTS_PATH))
    }
}

/// Everything one analyzer run needs.
///
/// # Example
///
/// ```
/// use dbcmp_cli::config::AnalyzerConfig;
/// use std::path::Path;
///
/// let config = AnalyzerConfig::new("bench").with_output_dir("report");
/// assert_eq!(config.output_dir, Path::new("report"));
/// assert!(config.candidate.csv.starts_with("bench/citus"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Base input directory.
    pub base_dir: PathBuf,
    /// Where artifacts are written.
    pub output_dir: PathBuf,
    /// Reference engine.
    pub baseline: EngineSource,
    /// Engine compared against the baseline.
    pub candidate: EngineSource,
    /// Chart styling.
    pub style: ChartStyle,
}

impl AnalyzerConfig {
    /// Conventional PostgreSQL-versus-Citus layout under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            output_dir: base_dir.join(OUTPUT_DIR),
            baseline: EngineSource::conventional(Engine::postgresql(), &base_dir, BASELINE_DIR),
            candidate: EngineSource::conventional(Engine::citus(), &base_dir, CANDIDATE_DIR),
            style: ChartStyle::default(),
            base_dir,
        }
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replaces the baseline source.
    pub fn with_baseline(mut self, source: EngineSource) -> Self {
        self.baseline = source;
        self
    }

    /// Replaces the candidate source.
    pub fn with_candidate(mut self, source: EngineSource) -> Self {
        self.candidate = source;
        self
    }

    /// Replaces the chart style.
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// The engine pair being compared.
    pub fn comparison(&self) -> Comparison {
        Comparison::new(self.baseline.engine.clone(), self.candidate.engine.clone())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
