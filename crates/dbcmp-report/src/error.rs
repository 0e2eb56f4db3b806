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

//! Error types for report output.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for report output.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while writing a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Writing a report file failed.
    #[error("Failed to write report '{}': {message}", .path.display())]
    Io {
        /// Target file.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

impl ReportError {
    /// Wraps an I/O failure on `path`.
    pub fn io(path: impl AsRef<Path>, err: io::Error) -> Self {
        ReportError::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}
