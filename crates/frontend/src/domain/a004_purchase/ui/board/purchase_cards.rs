use contracts::domain::a004_purchase::{DetailId, Purchase, PurchaseId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::refresh_after;
use super::state::{BoardState, DetailForm};
use crate::domain::a004_purchase::api::{delete_detail, delete_purchase};
use crate::shared::components::catalog_cards::confirm;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;

/// One card per fetched purchase, with its lines
#[component]
pub fn PurchaseCards(
    state: RwSignal<BoardState>,
    detail_form: RwSignal<Option<DetailForm>>,
) -> impl IntoView {
    let toasts = use_notifications();
    let purchases = Memo::new(move |_| state.with(|s| s.purchases.clone()));

    let on_delete_purchase = Callback::new(move |id: PurchaseId| {
        if !confirm("¿Eliminar esta compra y todos sus detalles?") {
            return;
        }
        spawn_local(async move {
            match delete_purchase(id).await {
                Ok(()) => {
                    toasts.success("Compra eliminada", format!("Compra #{} eliminada", id));
                    refresh_after(state, "purchase delete").await;
                }
                Err(e) => toasts.error("Error al eliminar compra", e.to_string()),
            }
        });
    });

    let on_delete_detail = Callback::new(move |id: DetailId| {
        if !confirm("¿Eliminar este detalle?") {
            return;
        }
        spawn_local(async move {
            match delete_detail(id).await {
                Ok(()) => {
                    toasts.info("Detalle eliminado");
                    refresh_after(state, "detail delete").await;
                }
                Err(e) => toasts.error("Error al eliminar detalle", e.to_string()),
            }
        });
    });

    view! {
        <div class="purchase-list">
            <h2 class="purchase-list__title">"Compras"</h2>
            {move || {
                purchases
                    .get()
                    .into_iter()
                    .map(|purchase| {
                        let supplier = state.with_untracked(|s| s.supplier_label(purchase.proveedor));
                        view! {
                            <PurchaseCard
                                purchase=purchase
                                supplier=supplier
                                detail_form=detail_form
                                on_delete=on_delete_purchase
                                on_delete_detail=on_delete_detail
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn PurchaseCard(
    purchase: Purchase,
    supplier: String,
    detail_form: RwSignal<Option<DetailForm>>,
    on_delete: Callback<PurchaseId>,
    on_delete_detail: Callback<DetailId>,
) -> impl IntoView {
    let title = match purchase.id {
        Some(id) => format!("Compra #{} · {}", id, format_date(purchase.fecha_compra)),
        None => format!("Compra · {}", format_date(purchase.fecha_compra)),
    };
    let total = purchase.total_quantity();
    let add_form = DetailForm::add(&purchase);
    let purchase_id = purchase.id;

    let rows = purchase
        .detalles
        .into_iter()
        .map(|detail| {
            let edit_form = DetailForm::edit(&detail);
            let detail_id = detail.id;
            let display_name = detail.display_name();
            view! {
                <TableRow>
                    <TableCell>
                        <TableCellLayout truncate=true>{display_name}</TableCellLayout>
                    </TableCell>
                    <TableCell>{detail.cantidad}</TableCell>
                    <TableCell>{detail.inventario_anterior}</TableCell>
                    <TableCell>{detail.new_inventory()}</TableCell>
                    <TableCell>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=detail_id.is_none()
                            on_click=move |_| detail_form.set(edit_form.clone())
                            attr:title="Editar detalle"
                        >
                            {icon("pencil")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=detail_id.is_none()
                            on_click=move |_| {
                                if let Some(id) = detail_id {
                                    on_delete_detail.run(id);
                                }
                            }
                            attr:title="Eliminar detalle"
                        >
                            {icon("trash")}
                        </Button>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="card purchase-card">
            <div class="purchase-card__header">
                <span class="card__icon">{icon("purchases")}</span>
                <div class="purchase-card__heading">
                    <span class="card__title">{title}</span>
                    <span class="card__subtitle">{supplier}</span>
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    disabled=add_form.is_none()
                    on_click=move |_| detail_form.set(add_form.clone())
                    attr:title="Agregar detalle"
                >
                    {icon("plus")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    disabled=purchase_id.is_none()
                    on_click=move |_| {
                        if let Some(id) = purchase_id {
                            on_delete.run(id);
                        }
                    }
                    attr:title="Eliminar compra"
                >
                    {icon("trash")}
                </Button>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Producto"</TableHeaderCell>
                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                        <TableHeaderCell>"Inv. anterior"</TableHeaderCell>
                        <TableHeaderCell>"Inv. nuevo"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>

            <div class="purchase-card__footer">"Total: " {total}</div>
        </div>
    }
}
