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

//! Figure setup shared by the bar and scatter renderers.

use crate::error::{ChartError, Result};
use crate::layout::select_layout;
use crate::style::ChartStyle;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// One panel of an SVG figure.
pub(crate) type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// An SVG canvas split into one panel per workload.
pub(crate) struct Figure<'a> {
    root: Panel<'a>,
    path: &'a Path,
    pub panels: Vec<Panel<'a>>,
}

impl<'a> Figure<'a> {
    /// Opens a white canvas at `path` titled `title` with room for `panel_count` panels.
    pub fn open(path: &'a Path, title: &str, panel_count: usize, style: &ChartStyle) -> Result<Self> {
        let layout = select_layout(panel_count);
        let root = SVGBackend::new(path, (layout.width, layout.height)).into_drawing_area();
        root.fill(&WHITE)?;
        let body = root.titled(title, style.font(style.title_size))?;
        let panels = body.split_evenly(layout.grid());
        Ok(Self { root, path, panels })
    }

    /// Flushes the image to disk.
    pub fn save(self) -> Result<()> {
        self.root
            .present()
            .map_err(|e| ChartError::io(self.path, e))
    }
}

/// Marks a panel that has nothing to plot.
pub(crate) fn draw_empty_panel(panel: &Panel<'_>, style: &ChartStyle) -> Result<()> {
    let (width, height) = panel.dim_in_pixel();
    let text_style = style
        .font(style.axis_size)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    panel.draw(&Text::new(
        "No benchmark data",
        ((width / 2) as i32, (height / 2) as i32),
        text_style,
    ))?;
    Ok(())
}

/// Upper bound for a value axis whose tallest element reaches `peak`.
pub(crate) fn axis_ceiling(peak: f64, style: &ChartStyle) -> f64 {
    if peak.is_finite() && peak > 0.0 {
        peak * style.headroom
    } else {
        1.0
    }
}
