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

//! Panel grid selection shared by every chart.

/// Canvas size for a single standalone panel.
pub const SINGLE_PANEL_SIZE: (u32, u32) = (1000, 700);

/// Canvas size for two side-by-side panels.
pub const PANEL_PAIR_SIZE: (u32, u32) = (1500, 700);

/// Width of each panel once three or more share a row.
pub const PANEL_WIDTH: u32 = 700;

/// Height of every multi-panel canvas.
pub const PANEL_HEIGHT: u32 = 700;

/// Grid dimensions and canvas size for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    /// Panel rows.
    pub rows: usize,
    /// Panel columns.
    pub cols: usize,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl PanelLayout {
    /// Number of panel slots.
    pub fn panels(&self) -> usize {
        self.rows * self.cols
    }

    /// Grid shape as accepted by `DrawingArea::split_evenly`.
    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Chooses the panel grid for `panel_count` workloads.
///
/// One workload (or none) gets a single panel sized for standalone viewing,
/// two sit side by side, and three or more share one row whose width grows
/// with the count.
///
/// # Examples
///
/// ```
/// use dbcmp_charts::layout::select_layout;
///
/// assert_eq!(select_layout(1).grid(), (1, 1));
/// assert_eq!(select_layout(2).grid(), (1, 2));
/// assert_eq!(select_layout(4).grid(), (1, 4));
/// assert_eq!(select_layout(4).width, 2800);
/// ```
pub fn select_layout(panel_count: usize) -> PanelLayout {
    match panel_count {
        0 | 1 => PanelLayout {
            rows: 1,
            cols: 1,
            width: SINGLE_PANEL_SIZE.0,
            height: SINGLE_PANEL_SIZE.1,
        },
        2 => PanelLayout {
            rows: 1,
            cols: 2,
            width: PANEL_PAIR_SIZE.0,
            height: PANEL_PAIR_SIZE.1,
        },
        n => PanelLayout {
            rows: 1,
            cols: n,
            width: PANEL_WIDTH.saturating_mul(n as u32),
            height: PANEL_HEIGHT,
        },
    }
}
