//! PageFrame, the root wrapper of every routed page.
//!
//! Puts two attributes on the root element so pages can be found in the DOM:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a004_purchase--board"`
//!   - `data-page-category`: one of the `PAGE_CAT_*` constants

use leptos::prelude::*;

/// Plain CRUD list (stores, suppliers, products)
pub const PAGE_CAT_LIST: &str = "list";
/// Wide table page (inventory board)
pub const PAGE_CAT_BOARD: &str = "board";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_BOARD => "page page--board",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
