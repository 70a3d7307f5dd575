use crate::routes::routes::AppRoutes;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are pushed from every page.
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
