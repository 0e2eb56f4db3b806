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

//! Malformed result files.

use super::builders::ResultsCsv;
use super::{BASELINE, HEADER};

/// Rows the loader must drop, each paired with a short description.
///
/// Every row has the standard column count so only coercion decides.
pub fn malformed_rows() -> Vec<(&'static str, String)> {
    vec![
        ("empty tps", format!("{BASELINE},tpcb,10,1,,15.6")),
        ("empty latency", format!("{BASELINE},tpcb,10,1,640,")),
        ("text tps", format!("{BASELINE},tpcb,10,1,failed,15.6")),
        ("text latency", format!("{BASELINE},tpcb,10,1,640,timeout")),
        ("nan tps", format!("{BASELINE},tpcb,10,1,NaN,15.6")),
        ("infinite latency", format!("{BASELINE},tpcb,10,1,640,inf")),
    ]
}

/// A result file mixing `valid` good rows with every malformed row.
pub fn mixed_csv(valid: u32) -> String {
    let mut builder = ResultsCsv::new();
    for (_, line) in malformed_rows() {
        builder = builder.line(&line);
    }
    for run in 1..=valid {
        builder = builder.row(BASELINE, "tpcb", 10, run, 600.0 + f64::from(run), 15.0);
    }
    builder.build()
}

/// A header missing the latency column.
pub fn missing_latency_column_csv() -> String {
    let header = HEADER.trim_end().replace(",Latency_Avg_ms", "");
    ResultsCsv::new()
        .header(&header)
        .line(&format!("{BASELINE},tpcb,10,1,640"))
        .build()
}
