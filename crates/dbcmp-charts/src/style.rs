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

//! Colors, markers and font sizes for the comparison charts.

use plotters::style::{FontDesc, IntoFont, RGBColor};

/// Default four-color palette.
pub const PALETTE: [RGBColor; 4] = [
    RGBColor(0x2E, 0x86, 0xAB),
    RGBColor(0xA2, 0x3B, 0x72),
    RGBColor(0xF1, 0x8F, 0x01),
    RGBColor(0xC7, 0x3E, 0x1D),
];

/// Point marker shape for scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle.
    Circle,
    /// Filled square.
    Square,
}

/// How one engine's series is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Fill color.
    pub color: RGBColor,
    /// Scatter marker.
    pub marker: Marker,
}

/// Visual configuration shared by every chart.
///
/// The baseline and candidate series keep their colors and markers across
/// all three charts so the figures read together.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Baseline engine series.
    pub baseline: SeriesStyle,
    /// Candidate engine series.
    pub candidate: SeriesStyle,
    /// Font family for every text element.
    pub font_family: &'static str,
    /// Figure title size.
    pub title_size: u32,
    /// Per-panel caption size.
    pub caption_size: u32,
    /// Axis description size.
    pub axis_size: u32,
    /// Tick label and legend size.
    pub tick_size: u32,
    /// Bar value and point annotation size.
    pub annotation_size: u32,
    /// Bar width as a fraction of one client slot.
    pub bar_width: f64,
    /// Fill opacity of bars and markers.
    pub opacity: f64,
    /// Scatter marker radius in pixels.
    pub marker_size: u32,
    /// Whisker cap half-width as a fraction of the bar width.
    pub whisker_cap: f64,
    /// Value-axis headroom above the tallest element.
    pub headroom: f64,
    /// Panel margin in pixels.
    pub margin: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            baseline: SeriesStyle {
                color: PALETTE[0],
                marker: Marker::Circle,
            },
            candidate: SeriesStyle {
                color: PALETTE[2],
                marker: Marker::Square,
            },
            font_family: "sans-serif",
            title_size: 24,
            caption_size: 20,
            axis_size: 16,
            tick_size: 14,
            annotation_size: 12,
            bar_width: 0.35,
            opacity: 0.85,
            marker_size: 7,
            whisker_cap: 0.25,
            headroom: 1.15,
            margin: 20,
        }
    }
}

impl ChartStyle {
    /// Style for the engine at `index` in comparison order.
    pub fn series(&self, index: usize) -> SeriesStyle {
        if index == 0 {
            self.baseline
        } else {
            self.candidate
        }
    }

    /// Font of the given size in the configured family.
    pub fn font(&self, size: u32) -> FontDesc<'static> {
        (self.font_family, size).into_font()
    }
}

/// Title-cases a workload key for display: `select_only` becomes `Select Only`.
pub fn display_suite(suite: &str) -> String {
    suite
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
