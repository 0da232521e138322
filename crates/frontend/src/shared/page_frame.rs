//! PageFrame — standard root wrapper for every page rendered inside a tab.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a001_articulo--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every tab page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_articulo--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_LIST => "page",
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=base_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
