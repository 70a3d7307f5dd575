pub mod create_dialog;
pub mod detail_dialog;
pub mod pivot_table;
pub mod purchase_cards;
pub mod state;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::domain::a001_store::StoreId;
use contracts::domain::a002_supplier::SupplierId;
use contracts::domain::a004_purchase::SortOrder;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::create_dialog::CreatePurchaseDialog;
use self::detail_dialog::DetailDialog;
use self::pivot_table::PivotTable;
use self::purchase_cards::PurchaseCards;
use self::state::{create_state, BoardState, DetailForm, FetchOrigin};
use crate::domain::a001_store::api::list_stores;
use crate::domain::a001_store::sample::store_options;
use crate::domain::a002_supplier::api::{list_suppliers, supplier_options};
use crate::domain::a004_purchase::api::purchases_by_range;
use crate::shared::api_error::ApiError;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::id_select::IdSelect;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_BOARD};

/// Refetch purchases with the applied filters and rebuild the pivot.
///
/// Only user-triggered fetches show the loading state. Does nothing once the
/// page has been unmounted.
pub(crate) async fn refresh(
    state: RwSignal<BoardState>,
    origin: FetchOrigin,
) -> Result<(), ApiError> {
    let Some((query, scope)) = state.try_with_untracked(|s| (s.query.clone(), s.scope)) else {
        return Ok(());
    };

    let _ = state.try_update(|s| s.begin_fetch(origin));
    let result = purchases_by_range(&query, scope).await;
    let _ = state.try_update(|s| s.end_fetch(origin));

    match result {
        Ok(purchases) => {
            log::debug!("fetched {} purchases", purchases.len());
            let _ = state.try_update(|s| s.set_purchases(purchases));
            Ok(())
        }
        Err(e) => {
            let _ = state.try_update(|s| s.error = Some(e.to_string()));
            Err(e)
        }
    }
}

/// Background refetch after a successful mutation; failures stay in the page alert.
pub(crate) async fn refresh_after(state: RwSignal<BoardState>, action: &str) {
    if let Err(e) = refresh(state, FetchOrigin::Background).await {
        log::warn!("refresh after {} failed: {}", action, e);
    }
}

/// Purchases page: filters, the inventory pivot and the purchase cards
#[component]
pub fn InventoryBoardPage() -> impl IntoView {
    let state = create_state();
    let toasts = use_notifications();
    let create_open = RwSignal::new(false);
    let detail_form = RwSignal::new(None::<DetailForm>);

    spawn_local(async move {
        match list_stores().await {
            Ok(stores) => {
                let _ = state.try_update(|s| s.stores = stores);
            }
            Err(e) => log::warn!("stores not loaded: {}", e),
        }
    });

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    spawn_local(async move {
        let interval = config().poll_interval_ms;
        while alive.load(Ordering::Relaxed) {
            if let Err(e) = refresh(state, FetchOrigin::Background).await {
                log::warn!("purchase poll failed: {}", e);
            }
            TimeoutFuture::new(interval).await;
        }
        log::debug!("purchase poll stopped");
    });

    let on_store = Callback::new(move |store: Option<StoreId>| {
        state.update(|s| {
            s.draft.select_store(store);
            s.suppliers.clear();
        });
        let Some(store) = store else { return };
        spawn_local(async move {
            match list_suppliers(store).await {
                Ok(items) => {
                    let _ = state.try_update(|s| s.suppliers = items);
                }
                Err(e) => toasts.error("Error al cargar proveedores", e.to_string()),
            }
        });
    });

    let apply = move |_: leptos::ev::MouseEvent| {
        state.update(|s| s.apply_filters());
        spawn_local(async move {
            if let Err(e) = refresh(state, FetchOrigin::User).await {
                toasts.error("Error al cargar compras", e.to_string());
            }
        });
    };

    view! {
        <PageFrame page_id="a004_purchase--board" category=PAGE_CAT_BOARD>
            <div class="page__header">
                <h1 class="page__title">"Compras"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| create_open.set(true)
                >
                    {icon("plus")}
                    " Nueva compra"
                </Button>
            </div>

            <div class="filter-panel">
                <div class="filter-panel__field">
                    <label class="form__label" for="filtro-inicio">"Desde"</label>
                    <DateInput
                        id="filtro-inicio"
                        value=Signal::derive(move || state.with(|s| s.draft.fecha_inicio))
                        on_change=move |v| state.update(|s| s.draft.fecha_inicio = v)
                    />
                </div>
                <div class="filter-panel__field">
                    <label class="form__label" for="filtro-fin">"Hasta"</label>
                    <DateInput
                        id="filtro-fin"
                        value=Signal::derive(move || state.with(|s| s.draft.fecha_fin))
                        on_change=move |v| state.update(|s| s.draft.fecha_fin = v)
                    />
                </div>
                <div class="filter-panel__field">
                    <label class="form__label" for="filtro-limite">"Límite"</label>
                    <input
                        type="number"
                        id="filtro-limite"
                        class="form__input form__input--narrow"
                        min=config().min_limit.to_string()
                        max=config().max_limit.to_string()
                        prop:value=move || state.with(|s| s.draft.limit.clone())
                        on:input=move |ev| state.update(|s| s.draft.limit = event_target_value(&ev))
                    />
                </div>
                <div class="filter-panel__field">
                    <label class="form__label" for="filtro-tienda">"Tienda"</label>
                    <IdSelect
                        id="filtro-tienda"
                        options=Signal::derive(move || state.with(|s| store_options(&s.stores)))
                        value=Signal::derive(move || state.with(|s| s.draft.store))
                        on_change=on_store
                        placeholder="Todas"
                    />
                </div>
                <div class="filter-panel__field">
                    <label class="form__label" for="filtro-proveedor">"Proveedor"</label>
                    <IdSelect
                        id="filtro-proveedor"
                        options=Signal::derive(move || state.with(|s| supplier_options(&s.suppliers)))
                        value=Signal::derive(move || state.with(|s| s.draft.supplier))
                        on_change=Callback::new(move |v: Option<SupplierId>| state.update(|s| s.draft.supplier = v))
                        placeholder="Todos"
                        disabled=Signal::derive(move || state.with(|s| s.draft.store.is_none()))
                    />
                </div>
                <div class="filter-panel__field">
                    <label class="form__label" for="filtro-orden">"Orden"</label>
                    <select
                        id="filtro-orden"
                        class="form__select"
                        prop:value=move || state.with(|s| s.draft.order.as_str())
                        on:change=move |ev| {
                            state.update(|s| s.draft.order = SortOrder::parse(&event_target_value(&ev)))
                        }
                    >
                        <option value="desc">"Más recientes"</option>
                        <option value="asc">"Más antiguas"</option>
                    </select>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=apply
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                >
                    {icon("filter")}
                    " Filtrar"
                </Button>
            </div>

            {move || state.with(|s| s.error.clone()).map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <PivotTable state=state />
            <PurchaseCards state=state detail_form=detail_form />

            <CreatePurchaseDialog open=create_open state=state />
            <DetailDialog form=detail_form state=state />
        </PageFrame>
    }
}
