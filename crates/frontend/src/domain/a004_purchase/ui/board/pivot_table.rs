use contracts::domain::a003_product::ProductId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::refresh_after;
use super::state::BoardState;
use crate::domain::a004_purchase::api::edit_detail;
use crate::domain::a004_purchase::editor::{rollback, CellField};
use crate::domain::a004_purchase::pivot::ColumnSlot;
use crate::shared::date_utils::format_header;
use crate::shared::notifications::{use_notifications, NotificationService};

/// Text of the purchased-delta badge
pub fn delta_label(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

/// Close the edit cursor, then push purchased-quantity changes to the backend.
///
/// The local value is shown immediately; a rejected patch rolls it back.
fn commit_edit(state: RwSignal<BoardState>, toasts: NotificationService) {
    let Some(outcome) = state
        .try_update(|s| s.editor.commit(&mut s.board))
        .flatten()
    else {
        return;
    };

    let Some(patch) = outcome.patch else {
        log::debug!("local edit {:?} = {}", outcome.field, outcome.value);
        return;
    };

    spawn_local(async move {
        match edit_detail(patch.detail_id, &patch.body).await {
            Ok(_) => {
                toasts.info("Actualizado");
                refresh_after(state, "detail edit").await;
            }
            Err(e) => {
                log::warn!("detail {} not saved: {}", patch.detail_id, e);
                toasts.error("Error al actualizar", e.to_string());
                if state.try_update(|s| rollback(&mut s.board, &outcome)) == Some(true) {
                    log::debug!("rolled back detail {}", patch.detail_id);
                }
            }
        }
    });
}

/// Three inventory columns, the product name, then three purchased columns
#[component]
pub fn PivotTable(state: RwSignal<BoardState>) -> impl IntoView {
    let toasts = use_notifications();
    let on_commit = Callback::new(move |_: ()| commit_edit(state, toasts));

    let header = move |slot: ColumnSlot, label: &'static str| {
        view! {
            <TableHeaderCell>
                {move || format!("{} {}", label, format_header(state.with(|s| s.board.dates[slot.index()])))}
            </TableHeaderCell>
        }
    };

    view! {
        <div class="pivot">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {ColumnSlot::ALL.into_iter().map(|slot| header(slot, "Inventario")).collect_view()}
                        <TableHeaderCell>"Producto"</TableHeaderCell>
                        {ColumnSlot::ALL.into_iter().map(|slot| header(slot, "Compra")).collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || {
                            state.with(|s| {
                                s.board
                                    .rows
                                    .iter()
                                    .map(|r| (r.product_id, r.product_name.clone()))
                                    .collect::<Vec<_>>()
                            })
                        }
                        key=|(id, name)| (*id, name.clone())
                        children=move |(row_id, name)| {
                            view! {
                                <TableRow>
                                    {ColumnSlot::ALL
                                        .into_iter()
                                        .map(|slot| view! {
                                            <EditableCell state=state row_id=row_id field=CellField::Inventory(slot) on_commit=on_commit />
                                        })
                                        .collect_view()}
                                    <TableCell>
                                        <TableCellLayout truncate=true>{name}</TableCellLayout>
                                    </TableCell>
                                    {ColumnSlot::ALL
                                        .into_iter()
                                        .map(|slot| view! {
                                            <EditableCell state=state row_id=row_id field=CellField::Purchased(slot) on_commit=on_commit />
                                        })
                                        .collect_view()}
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || state.with(|s| s.board.rows.is_empty())>
                <div class="empty-state">"No hay compras en el rango seleccionado"</div>
            </Show>

            <div class="pivot__totals">
                <span>"Total comprado: "</span>
                <strong>{move || state.with(|s| s.board.total_purchased())}</strong>
            </div>
        </div>
    }
}

#[component]
fn EditableCell(
    state: RwSignal<BoardState>,
    row_id: ProductId,
    field: CellField,
    on_commit: Callback<()>,
) -> impl IntoView {
    let slot = field.slot();
    let editing = Memo::new(move |_| state.with(|s| s.editor.is_editing(row_id, field)));
    let present = Memo::new(move |_| {
        state.with(|s| s.board.row(row_id).and_then(|r| r.column(slot)).is_some())
    });

    let value = move || {
        state.with(|s| {
            s.board
                .row(row_id)
                .map(|r| match field {
                    CellField::Inventory(slot) => r.inventory_value(slot),
                    CellField::Purchased(slot) => r.quantity_value(slot),
                })
                .unwrap_or(0)
        })
    };
    let delta = move || match field {
        CellField::Purchased(slot) => {
            state.with(|s| s.board.row(row_id).and_then(|r| r.purchased_delta(slot)))
        }
        CellField::Inventory(_) => None,
    };
    let class = match field {
        CellField::Inventory(_) => "pivot__cell pivot__cell--inventory",
        CellField::Purchased(_) => "pivot__cell pivot__cell--purchased",
    };

    view! {
        <TableCell class=class>
            {move || {
                if editing.get() {
                    view! { <CellInput state=state on_commit=on_commit /> }.into_any()
                } else {
                    view! {
                        <span
                            class="pivot__value"
                            class:pivot__value--editable=move || present.get()
                            on:click=move |_| {
                                state.update(|s| {
                                    s.editor.begin(&s.board, row_id, field);
                                })
                            }
                        >
                            {value}
                        </span>
                        {move || {
                            delta()
                                .map(|d| {
                                    view! {
                                        <span class="pivot__delta" class:pivot__delta--negative=d < 0>
                                            {delta_label(d)}
                                        </span>
                                    }
                                })
                        }}
                    }
                        .into_any()
                }
            }}
        </TableCell>
    }
}

/// Number input of the open cell. Commits on blur or Enter.
#[component]
fn CellInput(state: RwSignal<BoardState>, on_commit: Callback<()>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    view! {
        <input
            node_ref=input_ref
            type="number"
            min="0"
            class="pivot__input"
            prop:value=state.with_untracked(|s| s.editor.pending())
            on:input=move |ev| state.update(|s| s.editor.set_pending(event_target_value(&ev)))
            on:blur=move |_| on_commit.run(())
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    on_commit.run(());
                }
            }
        />
    }
}
