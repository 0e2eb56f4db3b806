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

//! Engines under comparison.

use serde::Serialize;

/// A database engine as it appears in the result files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Engine {
    /// Identifier written to the `Database_Type` column.
    pub key: String,
    /// Display name for charts and reports.
    pub label: String,
}

impl Engine {
    /// Creates an engine from its identifier and display name.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Monolithic PostgreSQL.
    pub fn postgresql() -> Self {
        Self::new("postgresql", "PostgreSQL")
    }

    /// Distributed Citus.
    pub fn citus() -> Self {
        Self::new("citus", "Citus")
    }
}

/// The ordered pair of engines being compared.
///
/// Relative differences are always expressed as the candidate's change with
/// respect to the baseline.
///
/// # Examples
///
/// ```
/// use dbcmp_core::Comparison;
///
/// let comparison = Comparison::default();
/// assert_eq!(comparison.baseline.key, "postgresql");
/// assert_eq!(comparison.candidate.key, "citus");
/// assert_eq!(comparison.title(), "PostgreSQL vs Citus");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Engine A, the reference point.
    pub baseline: Engine,
    /// Engine B, measured against the baseline.
    pub candidate: Engine,
}

impl Comparison {
    /// Creates a comparison of `candidate` against `baseline`.
    pub fn new(baseline: Engine, candidate: Engine) -> Self {
        Self {
            baseline,
            candidate,
        }
    }

    /// Both engines, baseline first.
    pub fn engines(&self) -> [&Engine; 2] {
        [&self.baseline, &self.candidate]
    }

    /// `"<Baseline> vs <Candidate>"`.
    pub fn title(&self) -> String {
        format!("{} vs {}", self.baseline.label, self.candidate.label)
    }

    /// Header of the relative-difference pivot column.
    pub fn delta_column(&self) -> String {
        format!("{}_vs_{}_%", self.candidate.label, self.baseline.label)
    }

    /// Display label for an engine key, falling back to the key itself.
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.engines()
            .into_iter()
            .find(|engine| engine.key == key)
            .map(|engine| engine.label.as_str())
            .unwrap_or(key)
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Self::new(Engine::postgresql(), Engine::citus())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_column_names_candidate_first() {
        let comparison = Comparison::default();
        assert_eq!(comparison.delta_column(), "Citus_vs_PostgreSQL_%");
    }

    #[test]
    fn test_label_for_unknown_engine() {
        let comparison = Comparison::default();
        assert_eq!(comparison.label_for("citus"), "Citus");
        assert_eq!(comparison.label_for("mysql"), "mysql");
    }

    #[test]
    fn test_custom_engines() {
        let comparison = Comparison::new(Engine::new("pg16", "PG 16"), Engine::new("pg17", "PG 17"));
        assert_eq!(comparison.engines()[1].key, "pg17");
        assert_eq!(comparison.title(), "PG 16 vs PG 17");
    }
}
