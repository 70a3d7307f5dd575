pub mod nav;

use leptos::prelude::*;

use crate::shared::notifications::Toaster;
use nav::Nav;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                  Nav                     |
/// +------------------------------------------+
/// |                 page                     |
/// +------------------------------------------+
/// ```
///
/// The toast stack floats over the page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="app-main">
                {children()}
            </main>
            <Toaster />
        </div>
    }
}
