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

//! Error types for loading benchmark results.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for data loading operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while reading benchmark result files.
///
/// Malformed rows are not errors: rows whose throughput or latency cannot be
/// read as numbers are dropped by the loader. Only problems with the file as a
/// whole surface here.
///
/// # Examples
///
/// ```
/// use dbcmp_core::CoreError;
/// use std::path::PathBuf;
///
/// let err = CoreError::MissingInput {
///     path: PathBuf::from("citus/benchmark_results.csv"),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Input file not found: citus/benchmark_results.csv"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A source file does not exist.
    #[error("Input file not found: {}", .path.display())]
    MissingInput {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// The header row lacks one of the columns of the result schema.
    #[error("Missing required column '{column}' in {}", .path.display())]
    MissingColumn {
        /// File being read.
        path: PathBuf,
        /// Name of the absent column.
        column: String,
    },

    /// The file could not be framed as CSV (bad quoting, invalid UTF-8).
    #[error("CSV error in {}: {message}", .path.display())]
    Csv {
        /// File being read.
        path: PathBuf,
        /// Error reported by the CSV reader.
        message: String,
    },

    /// Reading the file failed.
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

impl CoreError {
    /// Wraps an I/O error, mapping "not found" onto [`CoreError::MissingInput`].
    pub fn io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if err.kind() == io::ErrorKind::NotFound {
            CoreError::MissingInput { path }
        } else {
            CoreError::Io {
                path,
                message: err.to_string(),
            }
        }
    }

    /// Wraps an error from the `csv` reader.
    pub fn csv(path: impl AsRef<Path>, err: csv::Error) -> Self {
        CoreError::Csv {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}
