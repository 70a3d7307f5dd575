use contracts::domain::a001_store::Store;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_store::api::list_stores;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Read-only list of the backend's stores
#[component]
pub fn StoreList() -> impl IntoView {
    let (stores, set_stores) = signal::<Vec<Store>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match list_stores().await {
                Ok(items) => set_stores.set(items),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    view! {
        <PageFrame page_id="a001_store--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">"Tiendas"</h1>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Cargando..." } else { "Actualizar" }}
                </Button>
            </div>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <div class="card-list">
                <For
                    each=move || stores.get()
                    key=|s| (s.id, s.nombre.clone())
                    children=move |store: Store| {
                        view! {
                            <div class="card card--row">
                                <span class="card__icon">{icon("store")}</span>
                                <span class="card__title">{store.nombre}</span>
                            </div>
                        }
                    }
                />
                <Show when=move || !loading.get() && stores.with(|s| s.is_empty()) && error.get().is_none()>
                    <div class="empty-state">"No hay tiendas registradas"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
