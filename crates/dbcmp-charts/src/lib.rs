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

//! SVG comparison charts for aggregated benchmark statistics.
//!
//! Three figures are produced from one [`StatisticsTable`]:
//!
//! - throughput bars ([`ChartKind::Throughput`])
//! - latency bars ([`ChartKind::Latency`])
//! - a latency-versus-throughput scatter ([`ChartKind::Tradeoff`])
//!
//! Every figure lays its workloads out with [`layout::select_layout`] and
//! draws each engine with the same [`ChartStyle`] entry.
//!
//! # Example
//!
//! ```no_run
//! use dbcmp_charts::{render_all, ChartStyle};
//! use dbcmp_core::{aggregate, load_pair, Comparison};
//! use std::path::Path;
//!
//! let dataset = load_pair(Path::new("pg.csv"), Path::new("citus.csv"))?;
//! let stats = aggregate(&dataset);
//! let charts = render_all(&stats, &Comparison::default(), &ChartStyle::default(), Path::new("out"))?;
//! println!("{}", charts.throughput.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod bars;
pub mod error;
pub mod layout;
mod panel;
pub mod scatter;
pub mod style;

pub use bars::render_metric_bars;
pub use error::{ChartError, Result};
pub use layout::{select_layout, PanelLayout};
pub use scatter::render_tradeoff_scatter;
pub use style::{ChartStyle, Marker, SeriesStyle};

use dbcmp_core::{Comparison, Metric, StatisticsTable};
use std::path::{Path, PathBuf};
use tracing::info;

/// The figures written for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Mean TPS bars.
    Throughput,
    /// Mean latency bars.
    Latency,
    /// Latency against TPS.
    Tradeoff,
}

impl ChartKind {
    /// All figures in report order.
    pub const ALL: [ChartKind; 3] = [ChartKind::Throughput, ChartKind::Latency, ChartKind::Tradeoff];

    /// Image file name inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::Throughput => "tps_comparison.svg",
            ChartKind::Latency => "latency_comparison.svg",
            ChartKind::Tradeoff => "throughput_vs_latency.svg",
        }
    }

    /// Figure heading, without the engine pair.
    pub fn heading(&self) -> &'static str {
        match self {
            ChartKind::Throughput => "Performance Comparison: Transactions Per Second (TPS)",
            ChartKind::Latency => "Latency Comparison: Average Response Time",
            ChartKind::Tradeoff => "Performance Trade-off: TPS vs Latency",
        }
    }

    /// Full figure title for `comparison`.
    pub fn title(&self, comparison: &Comparison) -> String {
        format!("{} - {}", self.heading(), comparison.title())
    }
}

/// Paths of the rendered figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartArtifacts {
    /// Throughput bar chart.
    pub throughput: PathBuf,
    /// Latency bar chart.
    pub latency: PathBuf,
    /// Trade-off scatter.
    pub tradeoff: PathBuf,
}

impl ChartArtifacts {
    /// Path of the figure of the given kind.
    pub fn path(&self, kind: ChartKind) -> &Path {
        match kind {
            ChartKind::Throughput => &self.throughput,
            ChartKind::Latency => &self.latency,
            ChartKind::Tradeoff => &self.tradeoff,
        }
    }
}

/// Renders all three figures into `output_dir`, which must exist.
pub fn render_all(
    stats: &StatisticsTable,
    comparison: &Comparison,
    style: &ChartStyle,
    output_dir: &Path,
) -> Result<ChartArtifacts> {
    let artifacts = ChartArtifacts {
        throughput: output_dir.join(ChartKind::Throughput.file_name()),
        latency: output_dir.join(ChartKind::Latency.file_name()),
        tradeoff: output_dir.join(ChartKind::Tradeoff.file_name()),
    };

    for (kind, metric) in [
        (ChartKind::Throughput, Metric::Throughput),
        (ChartKind::Latency, Metric::Latency),
    ] {
        render_metric_bars(
            stats,
            metric,
            comparison,
            style,
            &kind.title(comparison),
            artifacts.path(kind),
        )?;
        info!(path = %artifacts.path(kind).display(), "saved {} chart", metric.name());
    }

    let kind = ChartKind::Tradeoff;
    render_tradeoff_scatter(stats, comparison, style, &kind.title(comparison), artifacts.path(kind))?;
    info!(path = %artifacts.path(kind).display(), "saved trade-off chart");

    Ok(artifacts)
}
