use chrono::NaiveDate;
use contracts::domain::a001_store::{Store, StoreId};
use contracts::domain::a002_supplier::{Supplier, SupplierId};
use contracts::domain::a003_product::ProductId;
use contracts::domain::a004_purchase::{
    Detail, DetailCreate, DetailId, DetailUpdate, Purchase, PurchaseCreate, PurchaseId,
    PurchaseRangeQuery, PurchaseScope, SortOrder,
};
use leptos::prelude::*;

use crate::domain::a004_purchase::editor::{parse_cell_value, InlineEditor};
use crate::domain::a004_purchase::pivot::{build_inventory_board, InventoryBoard};
use crate::shared::config::config;

/// Values of the filter panel before "Filtrar" is pressed
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDraft {
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    /// Raw text of the limit field
    pub limit: String,
    pub order: SortOrder,
    pub store: Option<StoreId>,
    pub supplier: Option<SupplierId>,
}

impl Default for FilterDraft {
    fn default() -> Self {
        let query = PurchaseRangeQuery::default();
        Self {
            fecha_inicio: None,
            fecha_fin: None,
            limit: query.limit.to_string(),
            order: query.order,
            store: None,
            supplier: None,
        }
    }
}

impl FilterDraft {
    pub fn select_store(&mut self, store: Option<StoreId>) {
        self.store = store;
        self.supplier = None;
    }

    /// Query and scope this draft stands for. Unparseable limits fall back to the default.
    pub fn to_query(&self) -> (PurchaseRangeQuery, Option<PurchaseScope>) {
        let limit = self
            .limit
            .trim()
            .parse::<u32>()
            .map(|l| config().clamp_limit(l))
            .unwrap_or_else(|_| PurchaseRangeQuery::default().limit);
        let query = PurchaseRangeQuery {
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            limit,
            order: self.order,
        };
        (query, PurchaseScope::from_parts(self.store, self.supplier))
    }
}

/// Who asked for a purchase fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// "Filtrar" button
    User,
    /// Poll tick or refetch after a mutation
    Background,
}

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub draft: FilterDraft,
    pub query: PurchaseRangeQuery,
    pub scope: Option<PurchaseScope>,
    pub stores: Vec<Store>,
    /// Suppliers of `draft.store`
    pub suppliers: Vec<Supplier>,
    pub purchases: Vec<Purchase>,
    pub board: InventoryBoard,
    pub editor: InlineEditor,
    pub loading: bool,
    pub error: Option<String>,
}

impl BoardState {
    /// Copy the draft into the query used by the next fetch
    pub fn apply_filters(&mut self) {
        let (query, scope) = self.draft.to_query();
        self.draft.limit = query.limit.to_string();
        self.query = query;
        self.scope = scope;
    }

    pub fn begin_fetch(&mut self, origin: FetchOrigin) {
        if origin == FetchOrigin::User {
            self.loading = true;
        }
    }

    pub fn end_fetch(&mut self, origin: FetchOrigin) {
        if origin == FetchOrigin::User {
            self.loading = false;
        }
    }

    /// Replace the fetched purchases and rebuild the pivot. Local inventory overrides are lost.
    pub fn set_purchases(&mut self, purchases: Vec<Purchase>) {
        self.board = build_inventory_board(&purchases);
        self.purchases = purchases;
        self.error = None;
    }

    pub fn supplier_label(&self, id: SupplierId) -> String {
        self.suppliers
            .iter()
            .find(|s| s.id == Some(id))
            .map(|s| s.nombre.clone())
            .unwrap_or_else(|| format!("Proveedor {}", id))
    }
}

pub fn create_state() -> RwSignal<BoardState> {
    RwSignal::new(BoardState::default())
}

/// Fields of the create-purchase dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseDraft {
    pub store: Option<StoreId>,
    pub supplier: Option<SupplierId>,
    pub fecha_compra: Option<NaiveDate>,
}

impl PurchaseDraft {
    pub fn select_store(&mut self, store: Option<StoreId>) {
        self.store = store;
        self.supplier = None;
    }

    pub fn to_request(&self) -> Option<PurchaseCreate> {
        self.store?;
        Some(PurchaseCreate {
            proveedor_id: self.supplier?,
            fecha_compra: self.fecha_compra?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTarget {
    Edit(DetailId),
    Add {
        purchase: PurchaseId,
        supplier: SupplierId,
    },
}

/// Fields of the detail dialog, shared by edit and add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailForm {
    pub target: DetailTarget,
    pub product: Option<ProductId>,
    pub cantidad: String,
    pub inventario_anterior: String,
}

impl DetailForm {
    pub fn edit(detail: &Detail) -> Option<Self> {
        Some(Self {
            target: DetailTarget::Edit(detail.id?),
            product: Some(detail.producto),
            cantidad: detail.cantidad.to_string(),
            inventario_anterior: detail.inventario_anterior.to_string(),
        })
    }

    pub fn add(purchase: &Purchase) -> Option<Self> {
        Some(Self {
            target: DetailTarget::Add {
                purchase: purchase.id?,
                supplier: purchase.proveedor,
            },
            product: None,
            cantidad: "0".to_string(),
            inventario_anterior: "0".to_string(),
        })
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            DetailTarget::Edit(_) => "Editar detalle",
            DetailTarget::Add { .. } => "Agregar detalle",
        }
    }

    pub fn to_update(&self) -> DetailUpdate {
        DetailUpdate {
            cantidad: parse_cell_value(&self.cantidad),
            inventario_anterior: parse_cell_value(&self.inventario_anterior),
        }
    }

    pub fn to_create(&self) -> Option<DetailCreate> {
        let update = self.to_update();
        Some(DetailCreate {
            producto_id: self.product?,
            cantidad: update.cantidad,
            inventario_anterior: update.inventario_anterior,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn default_draft_matches_default_query() {
        let (query, scope) = FilterDraft::default().to_query();
        assert_eq!(query, PurchaseRangeQuery::default());
        assert_eq!(scope, None);
    }

    #[test]
    fn limit_is_clamped_and_bad_text_falls_back() {
        let mut draft = FilterDraft {
            limit: "500".into(),
            ..Default::default()
        };
        assert_eq!(draft.to_query().0.limit, 100);
        draft.limit = "0".into();
        assert_eq!(draft.to_query().0.limit, 1);
        draft.limit = "muchos".into();
        assert_eq!(draft.to_query().0.limit, 3);
    }

    #[test]
    fn scope_needs_store_and_supplier() {
        let mut draft = FilterDraft::default();
        draft.select_store(Some(StoreId(1)));
        assert_eq!(draft.to_query().1, None);
        draft.supplier = Some(SupplierId(2));
        assert_eq!(
            draft.to_query().1,
            Some(PurchaseScope {
                tienda_id: StoreId(1),
                proveedor_id: SupplierId(2)
            })
        );
        draft.select_store(Some(StoreId(2)));
        assert_eq!(draft.supplier, None);
    }

    #[test]
    fn apply_filters_normalises_limit_text() {
        let mut state = BoardState::default();
        state.draft.limit = " 250 ".into();
        state.draft.fecha_inicio = Some(day("2024-01-01"));
        state.apply_filters();
        assert_eq!(state.query.limit, 100);
        assert_eq!(state.draft.limit, "100");
        assert_eq!(state.query.fecha_inicio, Some(day("2024-01-01")));
    }

    #[test]
    fn background_fetch_leaves_filter_button_alone() {
        let mut state = BoardState::default();
        state.begin_fetch(FetchOrigin::Background);
        assert!(!state.loading);

        state.begin_fetch(FetchOrigin::User);
        assert!(state.loading);
        state.begin_fetch(FetchOrigin::Background);
        state.end_fetch(FetchOrigin::Background);
        assert!(state.loading);
        state.end_fetch(FetchOrigin::User);
        assert!(!state.loading);
    }

    #[test]
    fn set_purchases_rebuilds_board() {
        let mut state = BoardState {
            error: Some("Error de red: timeout".into()),
            ..Default::default()
        };
        state.set_purchases(vec![Purchase {
            id: Some(PurchaseId(1)),
            proveedor: SupplierId(1),
            fecha_compra: day("2024-03-01"),
            detalles: vec![Detail {
                id: Some(DetailId(10)),
                producto: ProductId(7),
                producto_nombre: Some("Harina".into()),
                cantidad: 4,
                inventario_anterior: 6,
            }],
        }]);
        assert_eq!(state.board.rows.len(), 1);
        assert_eq!(state.board.total_purchased(), 4);
        assert_eq!(state.error, None);
        assert_eq!(state.supplier_label(SupplierId(1)), "Proveedor 1");
    }

    #[test]
    fn purchase_draft_needs_every_field() {
        let mut draft = PurchaseDraft::default();
        draft.select_store(Some(StoreId(1)));
        draft.supplier = Some(SupplierId(2));
        assert_eq!(draft.to_request(), None);
        draft.fecha_compra = Some(day("2024-05-02"));
        assert_eq!(
            draft.to_request(),
            Some(PurchaseCreate {
                proveedor_id: SupplierId(2),
                fecha_compra: day("2024-05-02"),
            })
        );
        draft.select_store(None);
        assert_eq!(draft.to_request(), None);
    }

    #[test]
    fn detail_form_parses_like_cells() {
        let detail = Detail {
            id: Some(DetailId(3)),
            producto: ProductId(9),
            producto_nombre: None,
            cantidad: 5,
            inventario_anterior: 20,
        };
        let mut form = DetailForm::edit(&detail).unwrap();
        assert_eq!(form.title(), "Editar detalle");
        form.cantidad = "x".into();
        assert_eq!(
            form.to_update(),
            DetailUpdate {
                cantidad: 0,
                inventario_anterior: 20
            }
        );
    }

    #[test]
    fn add_form_requires_product() {
        let purchase = Purchase {
            id: Some(PurchaseId(4)),
            proveedor: SupplierId(2),
            fecha_compra: day("2024-05-02"),
            detalles: Vec::new(),
        };
        let mut form = DetailForm::add(&purchase).unwrap();
        assert_eq!(
            form.target,
            DetailTarget::Add {
                purchase: PurchaseId(4),
                supplier: SupplierId(2)
            }
        );
        assert_eq!(form.to_create(), None);
        form.product = Some(ProductId(1));
        form.cantidad = "12".into();
        assert_eq!(
            form.to_create(),
            Some(DetailCreate {
                producto_id: ProductId(1),
                cantidad: 12,
                inventario_anterior: 0
            })
        );
    }
}
