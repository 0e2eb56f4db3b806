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

//! Shared test fixtures for the dbcmp crates.
//!
//! Fixtures are plain CSV text in the layout the benchmark runner emits, so
//! every crate can exercise its real loading path without depending on the
//! types of another crate.
//!
//! # Quick Start
//!
//! ```rust
//! use dbcmp_test::fixtures;
//! use dbcmp_test::fixtures::builders::ResultsCsv;
//!
//! // Canonical two-workload result sets
//! let baseline = fixtures::baseline_csv();
//! let candidate = fixtures::candidate_csv();
//! assert!(baseline.starts_with(fixtures::HEADER));
//!
//! // Custom rows, including malformed ones
//! let csv = ResultsCsv::new()
//!     .row("citus", "select_only", 10, 1, 1500.0, 6.6)
//!     .raw_row("citus", "select_only", "10", "2", "N/A", "6.8")
//!     .build();
//! assert_eq!(csv.lines().count(), 3);
//! ```

pub mod fixtures;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `content` to `relative` under `dir`, creating parent directories.
///
/// Returns the full path of the written file.
pub fn write_fixture(dir: &Path, relative: impl AsRef<Path>, content: &str) -> io::Result<PathBuf> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}
