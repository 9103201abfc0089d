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

//! End-to-end attachment tests for the integration marker.
//!
//! The marked functions and modules below compile into this harness and show
//! up as ignored with the `integration` reason in a default run; pass
//! `--ignored` to execute only them, `--include-ignored` for everything.

use std::str::FromStr;

use testtag::integration_test;
use testtag::TestCategory;
use testtag::INTEGRATION_IGNORE_REASON;

#[integration_test]
#[test]
fn marked_function_runs_only_in_integration_selections() {
    assert_eq!(
        TestCategory::Integration.ignore_reason(),
        Some(INTEGRATION_IGNORE_REASON)
    );
}

#[test]
fn unmarked_function_stays_in_the_unit_category() {
    assert_eq!(TestCategory::Unit.ignore_reason(), None);
}

#[integration_test]
mod marked_suite {
    // No per-function markers: all three inherit the category from the
    // module-level attribute.

    #[test]
    fn first_member_inherits_the_category() {
        assert_eq!(shared_fixture(), 42);
    }

    #[test]
    fn second_member_inherits_the_category() {}

    #[test]
    fn third_member_inherits_the_category() {}

    fn shared_fixture() -> u32 {
        42
    }
}

mod mixed_suite {
    use testtag::integration_test;

    #[integration_test]
    #[test]
    fn only_this_member_is_integration() {}

    #[test]
    fn sibling_remains_unit() {}

    #[test]
    fn second_sibling_remains_unit() {}
}

#[test]
fn ignore_reason_parses_back_to_the_integration_category() {
    let parsed = TestCategory::from_str(INTEGRATION_IGNORE_REASON).unwrap();
    assert_eq!(parsed, TestCategory::Integration);
}

#[test]
fn category_names_survive_a_serde_round_trip() {
    let encoded = serde_json::to_string(&TestCategory::Integration).unwrap();
    assert_eq!(encoded, "\"integration\"");

    let decoded: TestCategory = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, TestCategory::Integration);

    let unit: TestCategory = serde_json::from_str("\"unit\"").unwrap();
    assert_eq!(unit, TestCategory::Unit);
}
