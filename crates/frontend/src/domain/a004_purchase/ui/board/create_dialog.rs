use contracts::domain::a001_store::StoreId;
use contracts::domain::a002_supplier::{Supplier, SupplierId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::refresh_after;
use super::state::{BoardState, PurchaseDraft};
use crate::domain::a001_store::sample::store_options;
use crate::domain::a002_supplier::api::{list_suppliers, supplier_options};
use crate::domain::a004_purchase::api::create_purchase;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::id_select::IdSelect;
use crate::shared::notifications::use_notifications;

/// Store, then supplier, then date. The backend fills in zeroed lines.
#[component]
pub fn CreatePurchaseDialog(open: RwSignal<bool>, state: RwSignal<BoardState>) -> impl IntoView {
    let toasts = use_notifications();
    let draft = RwSignal::new(PurchaseDraft::default());
    let suppliers = RwSignal::new(Vec::<Supplier>::new());
    let saving = RwSignal::new(false);

    let on_store = Callback::new(move |store: Option<StoreId>| {
        draft.update(|d| d.select_store(store));
        suppliers.set(Vec::new());
        let Some(store) = store else { return };
        spawn_local(async move {
            match list_suppliers(store).await {
                Ok(items) => {
                    let _ = suppliers.try_set(items);
                }
                Err(e) => toasts.error("Error al cargar proveedores", e.to_string()),
            }
        });
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let Some(body) = draft.with_untracked(|d| d.to_request()) else {
            toasts.error("Datos incompletos", "Seleccione tienda, proveedor y fecha");
            return;
        };
        saving.set(true);
        spawn_local(async move {
            match create_purchase(&body).await {
                Ok(created) => {
                    log::info!("purchase {:?} created", created.id);
                    toasts.success(
                        "Compra creada",
                        "La compra se creó correctamente con detalles en cero",
                    );
                    let _ = draft.try_set(PurchaseDraft::default());
                    let _ = open.try_set(false);
                    refresh_after(state, "purchase create").await;
                }
                Err(e) => toasts.error("Error al crear compra", e.to_string()),
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Nueva compra"</DialogTitle>
                    <DialogContent>
                        <div class="form">
                            <label class="form__label" for="compra-tienda">"Tienda"</label>
                            <IdSelect
                                id="compra-tienda"
                                options=Signal::derive(move || state.with(|s| store_options(&s.stores)))
                                value=Signal::derive(move || draft.with(|d| d.store))
                                on_change=on_store
                                placeholder="Seleccione una tienda"
                            />

                            <label class="form__label" for="compra-proveedor">"Proveedor"</label>
                            <IdSelect
                                id="compra-proveedor"
                                options=Signal::derive(move || suppliers.with(|s| supplier_options(s)))
                                value=Signal::derive(move || draft.with(|d| d.supplier))
                                on_change=Callback::new(move |v: Option<SupplierId>| draft.update(|d| d.supplier = v))
                                placeholder="Seleccione un proveedor"
                                disabled=Signal::derive(move || draft.with(|d| d.store.is_none()))
                            />

                            <label class="form__label" for="compra-fecha">"Fecha de compra"</label>
                            <DateInput
                                id="compra-fecha"
                                required=true
                                value=Signal::derive(move || draft.with(|d| d.fecha_compra))
                                on_change=move |v| draft.update(|d| d.fecha_compra = v)
                            />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || {
                                saving.get() || draft.with(|d| d.to_request().is_none())
                            })
                        >
                            {move || if saving.get() { "Creando..." } else { "Crear" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancelar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
