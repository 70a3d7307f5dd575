use contracts::domain::a003_product::{Product, ProductId};
use contracts::domain::a004_purchase::{DetailCreate, DetailId, DetailUpdate, PurchaseId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::refresh_after;
use super::state::{BoardState, DetailForm, DetailTarget};
use crate::domain::a003_product::api::{list_products, product_options};
use crate::domain::a004_purchase::api::{create_detail, edit_detail};
use crate::shared::components::id_select::IdSelect;
use crate::shared::notifications::use_notifications;

enum DetailRequest {
    Edit(DetailId, DetailUpdate),
    Add(PurchaseId, DetailCreate),
}

/// Edit or add one purchase line. Open while `form` holds a value.
#[component]
pub fn DetailDialog(
    form: RwSignal<Option<DetailForm>>,
    state: RwSignal<BoardState>,
) -> impl IntoView {
    let toasts = use_notifications();
    let open = RwSignal::new(false);
    let products = RwSignal::new(Vec::<Product>::new());
    let saving = RwSignal::new(false);
    let target = Memo::new(move |_| form.with(|f| f.as_ref().map(|f| f.target)));

    Effect::new(move |_| {
        let current = target.get();
        open.set(current.is_some());
        if let Some(DetailTarget::Add { supplier, .. }) = current {
            products.set(Vec::new());
            spawn_local(async move {
                match list_products(supplier).await {
                    Ok(items) => {
                        let _ = products.try_set(items);
                    }
                    Err(e) => toasts.error("Error al cargar productos", e.to_string()),
                }
            });
        }
    });

    // closing through the mask or the cancel button drops the form
    Effect::new(move |_| {
        if !open.get() && form.with_untracked(|f| f.is_some()) {
            form.set(None);
        }
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let Some(current) = form.get_untracked() else { return };
        let request = match current.target {
            DetailTarget::Edit(detail_id) => DetailRequest::Edit(detail_id, current.to_update()),
            DetailTarget::Add { purchase, .. } => match current.to_create() {
                Some(body) => DetailRequest::Add(purchase, body),
                None => {
                    toasts.error("Datos incompletos", "Seleccione un producto");
                    return;
                }
            },
        };

        saving.set(true);
        spawn_local(async move {
            let result = match request {
                DetailRequest::Edit(detail_id, body) => {
                    edit_detail(detail_id, &body).await.map(|_| "Detalle actualizado")
                }
                DetailRequest::Add(purchase, body) => {
                    create_detail(purchase, &body).await.map(|_| "Detalle agregado")
                }
            };
            match result {
                Ok(title) => {
                    toasts.info(title);
                    let _ = form.try_set(None);
                    refresh_after(state, "detail save").await;
                }
                Err(e) => toasts.error("Error al guardar detalle", e.to_string()),
            }
            let _ = saving.try_set(false);
        });
    };

    let number_field = move |label: &'static str, id: &'static str, pick: fn(&DetailForm) -> &String, put: fn(&mut DetailForm, String)| {
        view! {
            <label class="form__label" for=id>{label}</label>
            <input
                type="number"
                min="0"
                id=id
                class="form__input"
                prop:value=move || form.with(|f| f.as_ref().map(|f| pick(f).clone()).unwrap_or_default())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(f) = f.as_mut() {
                            put(f, text);
                        }
                    })
                }
            />
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || form.with(|f| f.as_ref().map(|f| f.title()).unwrap_or_default())}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form">
                            <Show when=move || matches!(target.get(), Some(DetailTarget::Add { .. }))>
                                <label class="form__label" for="detalle-producto">"Producto"</label>
                                <IdSelect
                                    id="detalle-producto"
                                    options=Signal::derive(move || products.with(|p| product_options(p)))
                                    value=Signal::derive(move || form.with(|f| f.as_ref().and_then(|f| f.product)))
                                    on_change=Callback::new(move |v: Option<ProductId>| {
                                        form.update(|f| {
                                            if let Some(f) = f.as_mut() {
                                                f.product = v;
                                            }
                                        })
                                    })
                                    placeholder="Seleccione un producto"
                                />
                            </Show>
                            {number_field("Cantidad", "detalle-cantidad", |f| &f.cantidad, |f, v| f.cantidad = v)}
                            {number_field(
                                "Inventario anterior",
                                "detalle-anterior",
                                |f| &f.inventario_anterior,
                                |f, v| f.inventario_anterior = v,
                            )}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Guardar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| form.set(None)
                        >
                            "Cancelar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
