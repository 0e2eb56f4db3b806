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

//! Error type for the command-line tool.

use dbcmp_charts::ChartError;
use dbcmp_core::CoreError;
use dbcmp_report::ReportError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for analyzer runs.
pub type Result<T> = std::result::Result<T, CliError>;

/// Any failure of an analyzer run.
///
/// Stage errors are wrapped unchanged so their messages reach the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Loading or parsing the inputs failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Rendering a chart failed.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// Writing the summary or index failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// The output directory could not be created.
    #[error("Cannot create output directory '{}': {message}", .path.display())]
    OutputDir {
        /// Requested directory.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

impl CliError {
    /// Wraps a failure to create `path`.
    pub fn output_dir(path: impl AsRef<Path>, err: io::Error) -> Self {
        CliError::OutputDir {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_message_passes_through() {
        let core = CoreError::MissingInput {
            path: PathBuf::from("citus/results.csv"),
        };
        let err = CliError::from(core.clone());
        assert_eq!(err.to_string(), core.to_string());
    }

    #[test]
    fn test_output_dir_message() {
        let err = CliError::output_dir("out", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "Cannot create output directory 'out': denied");
    }
}
