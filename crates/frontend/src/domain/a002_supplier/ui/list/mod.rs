pub mod state;

use contracts::domain::a001_store::StoreId;
use leptos::prelude::*;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_store::sample::store_options;
use crate::shared::components::catalog_cards::{confirm, CatalogCard, CatalogCards, NameEditor};
use crate::shared::components::id_select::IdSelect;
use crate::shared::icons::icon;
use crate::shared::local_catalog::CatalogEntry;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn SupplierList() -> impl IntoView {
    let state = create_state();
    let toasts = use_notifications();

    let cards = Signal::derive(move || {
        state.with(|s| {
            s.visible()
                .into_iter()
                .filter_map(|sup| {
                    Some(CatalogCard {
                        key: sup.key()?,
                        title: sup.nombre.clone(),
                        subtitle: s.store_name(sup.tienda),
                    })
                })
                .collect::<Vec<_>>()
        })
    });

    let on_create = Callback::new(move |name: String| {
        let mut result = Ok(0);
        state.update(|s| {
            result = s.catalog.create(&name, s.selected_store);
            if result.is_ok() {
                s.creating = false;
            }
        });
        match result {
            Ok(key) => {
                log::info!("supplier {} created locally", key);
                toasts.info("Proveedor creado");
            }
            Err(e) => toasts.error("Error", e.to_string()),
        }
    });

    let on_rename = Callback::new(move |(key, name): (i64, String)| {
        let mut result = Ok(());
        state.update(|s| {
            result = s.catalog.rename(key, &name);
            if result.is_ok() {
                s.editing = None;
            }
        });
        match result {
            Ok(()) => toasts.info("Proveedor actualizado"),
            Err(e) => toasts.error("Error", e.to_string()),
        }
    });

    let on_delete = Callback::new(move |key: i64| {
        if !confirm("¿Eliminar este proveedor?") {
            return;
        }
        let mut removed = false;
        state.update(|s| removed = s.catalog.delete(key));
        if removed {
            toasts.info("Proveedor eliminado");
        }
    });

    view! {
        <PageFrame page_id="a002_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">"Proveedores"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=move |_| state.update(|s| s.creating = true)
                    disabled=Signal::derive(move || state.with(|s| s.selected_store.is_none()))
                    attr:title="Nuevo Proveedor"
                >
                    {icon("plus")}
                </Button>
            </div>

            <div class="filter-row">
                <IdSelect
                    options=Signal::derive(move || state.with(|s| store_options(&s.stores)))
                    value=Signal::derive(move || state.with(|s| s.selected_store))
                    on_change=Callback::new(move |v: Option<StoreId>| state.update(|s| s.selected_store = v))
                    placeholder="Filtrar por tienda"
                />
            </div>

            <Show when=move || state.with(|s| s.creating)>
                <div class="card card--new">
                    <NameEditor
                        initial=""
                        placeholder="Nombre del proveedor"
                        icon_name="suppliers"
                        on_save=on_create
                        on_cancel=Callback::new(move |_| state.update(|s| s.creating = false))
                    />
                </div>
            </Show>

            <CatalogCards
                cards=cards
                editing=Signal::derive(move || state.with(|s| s.editing))
                icon_name="suppliers"
                on_edit=Callback::new(move |key| state.update(|s| s.editing = key))
                on_rename=on_rename
                on_delete=on_delete
            />
        </PageFrame>
    }
}
