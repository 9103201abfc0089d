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

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse_quote;
use syn::Attribute;
use syn::Item;
use syn::ItemFn;
use syn::ItemMod;

/// Reason string written into the harness metadata of every marked test.
/// Must stay in sync with `testtag::INTEGRATION_IGNORE_REASON`.
const INTEGRATION_IGNORE_REASON: &str = "integration";

pub(super) fn integration_test_inner(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new_spanned(
            attr,
            "#[integration_test] does not accept arguments; presence alone is the signal",
        )
        .to_compile_error();
    }
    match syn::parse2::<Item>(item) {
        Ok(Item::Fn(item_fn)) => mark_fn(item_fn).into_token_stream(),
        Ok(Item::Mod(item_mod)) => mark_mod(item_mod),
        Ok(other) => syn::Error::new_spanned(
            &other,
            "#[integration_test] can only be applied to a function or an inline module",
        )
        .to_compile_error(),
        Err(err) => err.to_compile_error(),
    }
}

fn mark_fn(mut item_fn: ItemFn) -> ItemFn {
    push_ignore(&mut item_fn);
    item_fn
}

fn mark_mod(mut item_mod: ItemMod) -> TokenStream {
    if item_mod.content.is_none() {
        return syn::Error::new_spanned(
            &item_mod,
            "#[integration_test] cannot see the content of a non-inline module; \
             apply it to `mod name { .. }` or to the functions directly",
        )
        .to_compile_error();
    }
    if let Some((_, items)) = item_mod.content.as_mut() {
        for item in items.iter_mut() {
            mark_item(item);
        }
    }
    item_mod.into_token_stream()
}

/// Marks test functions in place; every test function in a marked module
/// inherits the classification, nested inline modules included.
fn mark_item(item: &mut Item) {
    match item {
        Item::Fn(item_fn) if is_test_fn(item_fn) => push_ignore(item_fn),
        Item::Mod(nested) => {
            if let Some((_, items)) = nested.content.as_mut() {
                for item in items.iter_mut() {
                    mark_item(item);
                }
            }
        }
        _ => {}
    }
}

/// An existing `#[ignore]` wins, whatever its reason; marking is additive and
/// applying the marker twice is the same as applying it once.
fn push_ignore(item_fn: &mut ItemFn) {
    if has_ignore(&item_fn.attrs) {
        return;
    }
    item_fn.attrs.push(ignore_attribute());
}

fn ignore_attribute() -> Attribute {
    let reason = INTEGRATION_IGNORE_REASON;
    parse_quote!(#[ignore = #reason])
}

fn has_ignore(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("ignore"))
}

/// Any attribute whose final path segment is `test` counts: `#[test]`,
/// `#[tokio::test]`, `#[test_log::test]` and the like.
fn is_test_fn(item_fn: &ItemFn) -> bool {
    item_fn.attrs.iter().any(|attr| {
        attr.path()
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "test")
    })
}
