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

//! Command-line tool comparing two database benchmark result sets.
//!
//! The `dbcmp` binary is a thin wrapper over [`BenchmarkAnalyzer`], which
//! runs the whole pipeline for an [`AnalyzerConfig`]:
//!
//! ```text
//! create output dir -> load_pair -> aggregate -> render_all -> write_summary -> write_index
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;

pub use analyzer::{AnalysisOutput, BenchmarkAnalyzer};
pub use cli::Cli;
pub use config::{AnalyzerConfig, EngineSource};
pub use error::{CliError, Result};
