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

//! Reading benchmark result files.
//!
//! The runner writes one CSV per engine. Both files share a fixed header
//! ([`REQUIRED_COLUMNS`]); additional columns are ignored. Rows whose
//! throughput or latency cannot be read as numbers are dropped without a
//! diagnostic.

use crate::dataset::Dataset;
use crate::error::{CoreError, Result};
use crate::record::{BenchmarkRecord, RawRecord, REQUIRED_COLUMNS};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Records read from one result file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    /// Source file.
    pub path: PathBuf,
    /// Usable records in file order.
    pub records: Vec<BenchmarkRecord>,
    /// Data rows in the file, usable or not.
    pub total_rows: usize,
    /// Rows dropped because throughput or latency was absent.
    pub dropped_rows: usize,
}

/// Reads one result file.
///
/// # Errors
///
/// - [`CoreError::MissingInput`] if the file does not exist
/// - [`CoreError::MissingColumn`] if the header lacks a schema column
/// - [`CoreError::Csv`] if the file cannot be framed as CSV
pub fn load_records(path: &Path) -> Result<LoadedTable> {
    let file = File::open(path).map_err(|e| CoreError::io(path, e))?;
    load_records_from_reader(file, path)
}

/// Reads result rows from any reader; `source` names it in errors.
///
/// # Examples
///
/// ```
/// use dbcmp_core::load_records_from_reader;
/// use std::path::Path;
///
/// let csv = "\
/// Database_Type,Suite,Clients,Run,TPS,Latency_Avg_ms
/// citus,tpcb,10,1,812.5,12.3
/// citus,tpcb,10,2,failed,12.9
/// ";
/// let table = load_records_from_reader(csv.as_bytes(), Path::new("citus.csv")).unwrap();
/// assert_eq!(table.records.len(), 1);
/// assert_eq!(table.total_rows, 2);
/// assert_eq!(table.dropped_rows, 1);
/// ```
pub fn load_records_from_reader<R: Read>(reader: R, source: &Path) -> Result<LoadedTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CoreError::csv(source, e))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CoreError::MissingColumn {
                path: source.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    let mut total_rows = 0usize;

    for result in csv_reader.deserialize::<RawRecord>() {
        let raw = result.map_err(|e| CoreError::csv(source, e))?;
        total_rows += 1;
        if let Some(record) = raw.into_record() {
            records.push(record);
        }
    }

    let dropped_rows = total_rows - records.len();
    if dropped_rows > 0 {
        debug!(
            path = %source.display(),
            dropped_rows,
            "dropped rows without numeric throughput or latency"
        );
    }

    Ok(LoadedTable {
        path: source.to_path_buf(),
        records,
        total_rows,
        dropped_rows,
    })
}

/// Loads the baseline and candidate files into one dataset.
///
/// Both paths are checked before either is parsed, so a missing candidate
/// file fails without reading the baseline. Baseline rows precede candidate
/// rows in the result.
pub fn load_pair(baseline: &Path, candidate: &Path) -> Result<Dataset> {
    for path in [baseline, candidate] {
        if !path.exists() {
            return Err(CoreError::MissingInput {
                path: path.to_path_buf(),
            });
        }
    }

    let baseline_table = load_records(baseline)?;
    let candidate_table = load_records(candidate)?;

    for table in [&baseline_table, &candidate_table] {
        info!(
            path = %table.path.display(),
            records = table.total_rows,
            valid = table.records.len(),
            "loaded benchmark results"
        );
    }

    let dataset = Dataset::concat([baseline_table.records, candidate_table.records]);
    info!(
        records = dataset.len(),
        workloads = ?dataset.suites(),
        clients = ?dataset.client_counts(),
        "combined dataset ready"
    );
    Ok(dataset)
}
