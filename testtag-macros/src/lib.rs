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

//! Procedural attribute macros backing the `testtag` crate.
//!
//! Downstream code should depend on `testtag` and use the re-exported
//! attribute from there; this crate only hosts the expansion.

use proc_macro::TokenStream;

use crate::integration_marker::integration_test_inner;

mod integration_marker;

/// Classifies a test function, or every test function in an inline module,
/// as an integration test.
///
/// The attribute takes no arguments; its presence is the entire signal. It
/// expands to the marked item with `#[ignore = "integration"]` added to each
/// test function, so the categorization lands in the compiled test metadata
/// that the harness inspects when collecting tests:
///
/// * `cargo test` runs unit tests only,
/// * `cargo test -- --ignored` runs integration tests only,
/// * `cargo test -- --include-ignored` runs everything.
///
/// On a function the attribute must be placed above `#[test]` (or the
/// framework's test attribute, e.g. `#[tokio::test]`), because outer
/// attributes expand first and the flag has to exist before the harness
/// generates the test descriptor.
///
/// ```
/// use testtag_macros::integration_test;
///
/// #[integration_test]
/// #[test]
/// fn exercises_live_collaborators() {}
///
/// #[integration_test]
/// mod slow_suite {
///     #[test]
///     fn first() {}
///
///     #[test]
///     fn second() {}
/// }
/// # fn main() {}
/// ```
#[proc_macro_attribute]
pub fn integration_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    integration_test_inner(attr.into(), item.into()).into()
}
