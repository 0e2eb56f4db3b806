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

//! Command-line surface.

use crate::analyzer::{AnalysisOutput, BenchmarkAnalyzer};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Compare two database benchmark result sets
///
/// Reads the PostgreSQL and Citus benchmark CSVs under the base directory
/// and writes charts, a text summary and an HTML index.
///
/// # Examples
///
/// ```bash
/// # Results under the current directory
/// dbcmp
///
/// # Explicit base and output directories
/// dbcmp --base-dir /srv/bench --output /srv/bench/report
/// ```
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dbcmp")]
#[command(author, version, about = "Compare PostgreSQL and Citus benchmark results", long_about = None)]
pub struct Cli {
    /// Base directory containing the engine result folders
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Output directory [default: <BASE_DIR>/comparison_charts]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Analyzer configuration described by the arguments.
    pub fn config(&self) -> AnalyzerConfig {
        let config = AnalyzerConfig::new(&self.base_dir);
        match &self.output {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        }
    }

    /// Runs the analyzer.
    pub fn execute(&self) -> Result<AnalysisOutput> {
        BenchmarkAnalyzer::new(self.config()).run()
    }
}
