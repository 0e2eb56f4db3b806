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

//! Latency-versus-throughput scatter per workload.

use crate::error::Result;
use crate::panel::{axis_ceiling, draw_empty_panel, Figure, Panel};
use crate::style::{display_suite, ChartStyle, Marker};
use dbcmp_core::{Comparison, StatisticsTable};
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

/// Mean latency, mean throughput and client count of one group.
type Point = (f64, f64, u32);

/// Plots mean latency against mean TPS, one panel per workload.
///
/// Each point is labeled with its client count as `"{clients}c"`.
pub fn render_tradeoff_scatter(
    stats: &StatisticsTable,
    comparison: &Comparison,
    style: &ChartStyle,
    title: &str,
    path: &Path,
) -> Result<()> {
    let suites = stats.suites();
    let figure = Figure::open(path, title, suites.len(), style)?;

    if suites.is_empty() {
        draw_empty_panel(&figure.panels[0], style)?;
    }
    for (panel, suite) in figure.panels.iter().zip(&suites) {
        draw_scatter_panel(panel, stats, suite, comparison, style)?;
    }

    debug!(path = %path.display(), panels = suites.len(), "rendered trade-off chart");
    figure.save()
}

fn draw_scatter_panel(
    panel: &Panel<'_>,
    stats: &StatisticsTable,
    suite: &str,
    comparison: &Comparison,
    style: &ChartStyle,
) -> Result<()> {
    let engines = comparison.engines();
    let series: Vec<Vec<Point>> = engines
        .iter()
        .map(|engine| {
            stats
                .series(suite, &engine.key)
                .into_iter()
                .map(|stat| (stat.latency.mean, stat.tps.mean, stat.key.clients))
                .collect()
        })
        .collect();

    let x_peak = series.iter().flatten().map(|p| p.0).fold(0.0, f64::max);
    let y_peak = series.iter().flatten().map(|p| p.1).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(panel)
        .caption(display_suite(suite), style.font(style.caption_size))
        .margin(style.margin)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..axis_ceiling(x_peak, style), 0.0..axis_ceiling(y_peak, style))?;

    chart
        .configure_mesh()
        .x_desc("Average Latency (ms)")
        .y_desc("TPS (Transactions/sec)")
        .label_style(style.font(style.tick_size))
        .axis_desc_style(style.font(style.axis_size))
        .draw()?;

    let r = style.marker_size as i32;
    let note_style = style.font(style.annotation_size).color(&BLACK);
    let mut drawn = 0;

    for (idx, (engine, points)) in engines.iter().zip(&series).enumerate() {
        if points.is_empty() {
            continue;
        }
        let series_style = style.series(idx);
        let color = series_style.color;
        let fill = color.mix(style.opacity).filled();
        let note = |clients: u32| Text::new(format!("{clients}c"), (r + 4, -r - 4), note_style.clone());

        match series_style.marker {
            Marker::Circle => {
                chart
                    .draw_series(points.iter().map(|&(x, y, clients)| {
                        EmptyElement::at((x, y))
                            + Circle::new((0, 0), style.marker_size, fill)
                            + note(clients)
                    }))?
                    .label(engine.label.clone())
                    .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
            }
            Marker::Square => {
                chart
                    .draw_series(points.iter().map(|&(x, y, clients)| {
                        EmptyElement::at((x, y))
                            + Rectangle::new([(-r, -r), (r, r)], fill)
                            + note(clients)
                    }))?
                    .label(engine.label.clone())
                    .legend(move |(x, y)| Rectangle::new([(x + 5, y - 5), (x + 15, y + 5)], color.filled()));
            }
        }
        drawn += 1;
    }

    if drawn > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(style.font(style.tick_size))
            .draw()?;
    }
    Ok(())
}
