// Copyright 2024 The Testtag Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Category vocabulary shared with external test-selection tooling.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Reason string the marker writes into the harness metadata of every
/// integration test.
pub const INTEGRATION_IGNORE_REASON: &str = "integration";

/// The two categories the marker partitions a test suite into.
///
/// A test is [`Integration`](TestCategory::Integration) exactly when it
/// carries the [`integration_test`](crate::integration_test) marker;
/// everything else is [`Unit`](TestCategory::Unit). Runners parse the
/// category named by their selection flag or configuration value into this
/// type; the selection itself remains theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCategory {
    /// Default category of every unmarked test.
    Unit,
    /// Category of tests carrying the marker.
    Integration,
}

impl TestCategory {
    /// Stable lowercase name used in flags, configuration, and wire formats.
    pub fn name(&self) -> &'static str {
        match self {
            TestCategory::Unit => "unit",
            TestCategory::Integration => "integration",
        }
    }

    /// Reason string recorded in the compiled test descriptor, if any.
    ///
    /// Unit tests carry no marker and therefore no reason.
    pub fn ignore_reason(&self) -> Option<&'static str> {
        match self {
            TestCategory::Unit => None,
            TestCategory::Integration => Some(INTEGRATION_IGNORE_REASON),
        }
    }
}

impl fmt::Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selection criterion named a category this crate does not define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown test category `{0}`, expected `unit` or `integration`")]
pub struct ParseTestCategoryError(String);

impl FromStr for TestCategory {
    type Err = ParseTestCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unit" => Ok(TestCategory::Unit),
            "integration" => Ok(TestCategory::Integration),
            other => Err(ParseTestCategoryError(other.to_string())),
        }
    }
}
