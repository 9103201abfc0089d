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

//! # Testtag
//!
//! A declarative integration-test marker for the standard Rust test harness.
//!
//! Tests carrying [`integration_test`] belong to the `integration` category;
//! everything else stays in the `unit` category. The marker has no runtime
//! behavior of its own: it writes the categorization into the compiled test
//! metadata, and selection stays entirely with the test runner.
//!
//! | Run                                  | Executes            |
//! |--------------------------------------|---------------------|
//! | `cargo test`                         | unit tests only     |
//! | `cargo test -- --ignored`            | integration only    |
//! | `cargo test -- --include-ignored`    | everything          |
//!
//! ## Usage
//!
//! ```
//! use testtag::integration_test;
//!
//! // One function.
//! #[integration_test]
//! #[test]
//! fn exercises_live_collaborators() {}
//!
//! // A whole suite: every test function inside inherits the category.
//! #[integration_test]
//! mod broker_suite {
//!     #[test]
//!     fn round_trips_a_message() {}
//!
//!     #[test]
//!     fn survives_reconnect() {}
//! }
//! # fn main() {}
//! ```
//!
//! External tooling that lets users name a category in a flag or a
//! configuration value can parse it with [`TestCategory`]:
//!
//! ```
//! use testtag::TestCategory;
//!
//! let selected: TestCategory = "integration".parse()?;
//! assert_eq!(selected, TestCategory::Integration);
//! # Ok::<(), testtag::ParseTestCategoryError>(())
//! ```

mod category;

pub use category::ParseTestCategoryError;
pub use category::TestCategory;
pub use category::INTEGRATION_IGNORE_REASON;
/// Re-export of the marker attribute.
pub use testtag_macros::integration_test;
