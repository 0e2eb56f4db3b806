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

//! Grouped bar charts of one metric per workload.

use crate::error::Result;
use crate::panel::{axis_ceiling, draw_empty_panel, Figure, Panel};
use crate::style::{display_suite, ChartStyle};
use dbcmp_core::{Comparison, Metric, StatisticsTable};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::debug;

/// One bar: slot center, mean height and deviation.
#[derive(Debug, Clone, Copy)]
struct Bar {
    center: f64,
    mean: f64,
    std_dev: f64,
}

impl Bar {
    fn top(&self) -> f64 {
        self.mean + self.std_dev
    }
}

/// Renders `metric` as grouped bars, one panel per workload.
///
/// Client counts form the category axis of each panel; every engine gets
/// one bar per client count it was measured at, with a one-deviation
/// whisker and the mean printed above it. Engines missing from a workload
/// simply leave their slots empty.
pub fn render_metric_bars(
    stats: &StatisticsTable,
    metric: Metric,
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
        draw_bar_panel(panel, stats, suite, metric, comparison, style)?;
    }

    debug!(path = %path.display(), metric = metric.name(), panels = suites.len(), "rendered bar chart");
    figure.save()
}

fn draw_bar_panel(
    panel: &Panel<'_>,
    stats: &StatisticsTable,
    suite: &str,
    metric: Metric,
    comparison: &Comparison,
    style: &ChartStyle,
) -> Result<()> {
    let clients = stats.client_counts(suite);
    let engines = comparison.engines();
    let slots = clients.len().max(1);

    // Bars of all engines sit side by side, centered on the slot.
    let spread = (engines.len() as f64 - 1.0) / 2.0;
    let series: Vec<Vec<Bar>> = engines
        .iter()
        .enumerate()
        .map(|(idx, engine)| {
            let offset = (idx as f64 - spread) * style.bar_width;
            stats
                .series(suite, &engine.key)
                .into_iter()
                .filter_map(|stat| {
                    let slot = clients.iter().position(|c| *c == stat.key.clients)?;
                    let summary = metric.summary(stat);
                    Some(Bar {
                        center: slot as f64 + offset,
                        mean: summary.mean,
                        std_dev: summary.std_dev,
                    })
                })
                .collect()
        })
        .collect();

    let peak = series.iter().flatten().map(Bar::top).fold(0.0, f64::max);
    let y_max = axis_ceiling(peak, style);

    let mut chart = ChartBuilder::on(panel)
        .caption(display_suite(suite), style.font(style.caption_size))
        .margin(style.margin)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5..(slots as f64 - 0.5), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| slot_label(*x, &clients))
        .x_desc("Number of Clients")
        .y_desc(metric.axis_label())
        .label_style(style.font(style.tick_size))
        .axis_desc_style(style.font(style.axis_size))
        .draw()?;

    let half = style.bar_width / 2.0;
    let cap = style.bar_width * style.whisker_cap;
    let value_style = style
        .font(style.annotation_size)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let mut drawn = 0;

    for (idx, (engine, bars)) in engines.iter().zip(&series).enumerate() {
        if bars.is_empty() {
            continue;
        }
        let color = style.series(idx).color;
        let fill = color.mix(style.opacity).filled();

        chart
            .draw_series(bars.iter().map(|bar| {
                Rectangle::new([(bar.center - half, 0.0), (bar.center + half, bar.mean)], fill)
            }))?
            .label(engine.label.clone())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));

        chart.draw_series(
            bars.iter()
                .filter(|bar| bar.std_dev > 0.0)
                .flat_map(|bar| whisker(bar, cap)),
        )?;

        chart.draw_series(bars.iter().map(|bar| {
            Text::new(
                metric.format_label(bar.mean),
                (bar.center, bar.top() + y_max * 0.01),
                value_style.clone(),
            )
        }))?;
        drawn += 1;
    }

    if drawn > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(style.font(style.tick_size))
            .draw()?;
    }
    Ok(())
}

/// Vertical stem and two caps spanning one deviation around the mean.
fn whisker(bar: &Bar, cap: f64) -> [PathElement<(f64, f64)>; 3] {
    let low = (bar.mean - bar.std_dev).max(0.0);
    let high = bar.top();
    let line = BLACK.stroke_width(1);
    [
        PathElement::new(vec![(bar.center, low), (bar.center, high)], line),
        PathElement::new(vec![(bar.center - cap, low), (bar.center + cap, low)], line),
        PathElement::new(vec![(bar.center - cap, high), (bar.center + cap, high)], line),
    ]
}

/// Tick text for category position `x`; blank between slots.
fn slot_label(x: f64, clients: &[u32]) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    clients
        .get(rounded as usize)
        .map(u32::to_string)
        .unwrap_or_default()
}
