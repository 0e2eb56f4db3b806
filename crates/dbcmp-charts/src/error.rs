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

//! Error types for chart rendering.

use plotters::drawing::DrawingAreaErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for chart rendering.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors raised while drawing or saving a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Plotting failed before the image was written.
    #[error("Chart drawing error: {0}")]
    Drawing(String),

    /// The finished image could not be saved.
    #[error("Failed to write chart '{}': {message}", .path.display())]
    Io {
        /// Target image path.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

impl ChartError {
    /// Wraps a failure to flush the image to `path`.
    pub fn io(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        ChartError::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}
