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

//! Static HTML index linking every artifact.

use crate::error::{ReportError, Result};
use crate::summary::SUMMARY_FILE;
use chrono::NaiveDateTime;
use dbcmp_charts::{ChartArtifacts, ChartKind};
use dbcmp_core::Comparison;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the HTML index.
pub const INDEX_FILE: &str = "index.html";

/// Timestamp format of the metadata block.
pub const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %H:%M:%S";

const DATA_SOURCE: &str =
    "pgbench benchmarks with TPC-B, Select-Only, and Simple-Update workloads";

/// One chart section of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSection {
    /// Which figure this is.
    pub kind: ChartKind,
    /// Image path relative to the page.
    pub src: String,
}

/// Content of the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPage {
    /// Baseline engine label.
    pub baseline: String,
    /// Candidate engine label.
    pub candidate: String,
    /// Generation time.
    pub generated_at: NaiveDateTime,
    /// Charts in display order.
    pub charts: Vec<ChartSection>,
}

impl IndexPage {
    /// Page for `charts`, referenced by file name so the output directory can move.
    pub fn new(comparison: &Comparison, charts: &ChartArtifacts, generated_at: NaiveDateTime) -> Self {
        let charts = ChartKind::ALL
            .into_iter()
            .map(|kind| ChartSection {
                kind,
                src: relative_src(charts.path(kind), kind),
            })
            .collect();

        Self {
            baseline: comparison.baseline.label.clone(),
            candidate: comparison.candidate.label.clone(),
            generated_at,
            charts,
        }
    }

    /// `"Baseline vs Candidate"`.
    pub fn title(&self) -> String {
        format!("{} vs {}", self.baseline, self.candidate)
    }

    /// Renders the complete document.
    pub fn render(&self) -> String {
        let title = escape_html(&self.title());
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!("<title>Performance Benchmark: {}</title>\n", title));
        html.push_str("<style>\n");
        html.push_str(include_str!("styles.css"));
        html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

        html.push_str("<h1>🏆 Performance Benchmark Analysis</h1>\n");
        html.push_str(&format!("<h2 class=\"subtitle\">{} Comparative Study</h2>\n", title));

        html.push_str("<div class=\"info\">\n");
        html.push_str(&format!(
            "<p><strong>📅 Generated on:</strong> {}</p>\n",
            self.generated_at.format(TIMESTAMP_FORMAT)
        ));
        html.push_str(&format!("<p><strong>📊 Data Source:</strong> {}</p>\n", DATA_SOURCE));
        html.push_str(&format!(
            "<p><strong>🎯 Objective:</strong> Compare performance between monolithic {} and distributed {} architectures</p>\n",
            escape_html(&self.baseline),
            escape_html(&self.candidate)
        ));
        html.push_str("</div>\n");

        for (idx, chart) in self.charts.iter().enumerate() {
            let text = SectionText::of(chart.kind);
            html.push_str(&format!("<h2>{} {}. {}</h2>\n", text.icon, idx + 1, text.heading));
            html.push_str(&format!(
                "<div class=\"chart\">\n<img src=\"{}\" alt=\"{}\">\n</div>\n",
                escape_html(&chart.src),
                text.alt
            ));
            html.push_str(&format!("<p class=\"caption\">{}</p>\n", text.caption));
        }

        html.push_str(&format!("<h2>📋 {}. Download Resources</h2>\n", self.charts.len() + 1));
        html.push_str("<div class=\"downloads\">\n");
        html.push_str(&format!(
            "<a href=\"{}\" class=\"download-btn\">📄 Detailed Summary</a>\n",
            SUMMARY_FILE
        ));
        for chart in &self.charts {
            html.push_str(&format!(
                "<a href=\"{}\" class=\"download-btn\" download>{}</a>\n",
                escape_html(&chart.src),
                SectionText::of(chart.kind).download
            ));
        }
        html.push_str("</div>\n");

        html.push_str("<div class=\"footer\">\n");
        html.push_str("<p><strong>Benchmark Analysis Report</strong></p>\n");
        html.push_str(&format!("<p>{} Performance Comparison</p>\n", title));
        html.push_str("</div>\n");

        html.push_str("</div>\n</body>\n</html>\n");
        html
    }
}

/// Fixed prose for one chart section.
struct SectionText {
    icon: &'static str,
    heading: &'static str,
    alt: &'static str,
    caption: &'static str,
    download: &'static str,
}

impl SectionText {
    fn of(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Throughput => SectionText {
                icon: "📈",
                heading: "Throughput Comparison (TPS)",
                alt: "TPS Comparison Chart",
                caption: "Transactions per second for each workload and client configuration, \
                          showing the raw processing capacity of both database architectures.",
                download: "📊 TPS Chart (SVG)",
            },
            ChartKind::Latency => SectionText {
                icon: "⏱️",
                heading: "Latency Analysis",
                alt: "Latency Comparison Chart",
                caption: "Average response time in milliseconds, \
                          indicating the responsiveness of each system under different loads.",
                download: "⏱️ Latency Chart (SVG)",
            },
            ChartKind::Tradeoff => SectionText {
                icon: "📊",
                heading: "Performance Trade-offs",
                alt: "TPS vs Latency Scatter Plot",
                caption: "The relationship between throughput and latency, \
                          helping identify the best performing configuration of each architecture.",
                download: "📈 Scatter Plot (SVG)",
            },
        }
    }
}

fn relative_src(path: &Path, kind: ChartKind) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| kind.file_name().to_string())
}

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes `page` to [`INDEX_FILE`] inside `dir`.
pub fn write_index(page: &IndexPage, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(INDEX_FILE);
    fs::write(&path, page.render()).map_err(|e| ReportError::io(&path, e))?;
    info!(path = %path.display(), "created HTML index");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dbcmp_core::Engine;
    use tempfile::TempDir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap()
    }

    fn artifacts(dir: &Path) -> ChartArtifacts {
        ChartArtifacts {
            throughput: dir.join("tps_comparison.svg"),
            latency: dir.join("latency_comparison.svg"),
            tradeoff: dir.join("throughput_vs_latency.svg"),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_images_use_relative_paths() {
        let page = IndexPage::new(&Comparison::default(), &artifacts(Path::new("/tmp/out")), at());
        let html = page.render();
        assert!(html.contains("<img src=\"tps_comparison.svg\""));
        assert!(html.contains("<img src=\"throughput_vs_latency.svg\""));
        assert!(!html.contains("/tmp/out"));
    }

    #[test]
    fn test_metadata_block() {
        let page = IndexPage::new(&Comparison::default(), &artifacts(Path::new("out")), at());
        let html = page.render();
        assert!(html.contains("<title>Performance Benchmark: PostgreSQL vs Citus</title>"));
        assert!(html.contains("March 14, 2025 at 09:26:53"));
        assert!(html.contains("monolithic PostgreSQL and distributed Citus"));
        assert!(html.contains("href=\"performance_summary.txt\""));
        assert!(html.contains("body {"));
    }

    #[test]
    fn test_engine_labels_are_escaped() {
        let comparison = Comparison::new(Engine::new("a", "A<1>"), Engine::new("b", "B&B"));
        let page = IndexPage::new(&comparison, &artifacts(Path::new("out")), at());
        let html = page.render();
        assert!(html.contains("A&lt;1&gt; vs B&amp;B"));
        assert!(!html.contains("A<1>"));
    }

    #[test]
    fn test_write_index() {
        let dir = TempDir::new().unwrap();
        let page = IndexPage::new(&Comparison::default(), &artifacts(dir.path()), at());
        let path = write_index(&page, dir.path()).unwrap();
        assert_eq!(path, dir.path().join(INDEX_FILE));
        assert!(fs::read_to_string(path).unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_write_index_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let page = IndexPage::new(&Comparison::default(), &artifacts(&missing), at());
        let err = write_index(&page, &missing).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
