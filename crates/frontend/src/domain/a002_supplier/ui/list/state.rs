use contracts::domain::a001_store::{Store, StoreId};
use contracts::domain::a002_supplier::{Supplier, SupplierId};
use leptos::prelude::*;

use crate::domain::a001_store::sample::{sample_stores, sample_suppliers};
use crate::shared::local_catalog::{CatalogEntry, LocalCatalog};

impl CatalogEntry for Supplier {
    type ParentId = StoreId;

    fn key(&self) -> Option<i64> {
        self.id.map(|id| id.value())
    }
    fn name(&self) -> &str {
        &self.nombre
    }
    fn parent(&self) -> StoreId {
        self.tienda
    }
    fn renamed(&self, nombre: String) -> Self {
        Self { nombre, ..self.clone() }
    }
    fn create(key: i64, nombre: String, tienda: StoreId) -> Self {
        Self {
            id: Some(SupplierId(key)),
            nombre,
            tienda,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SupplierListState {
    pub stores: Vec<Store>,
    pub catalog: LocalCatalog<Supplier>,
    pub selected_store: Option<StoreId>,
    /// Key of the card in rename mode
    pub editing: Option<i64>,
    pub creating: bool,
}

impl Default for SupplierListState {
    fn default() -> Self {
        Self {
            stores: sample_stores(),
            catalog: LocalCatalog::new(sample_suppliers()),
            selected_store: None,
            editing: None,
            creating: false,
        }
    }
}

impl SupplierListState {
    pub fn store_name(&self, id: StoreId) -> String {
        self.stores
            .iter()
            .find(|s| s.id == Some(id))
            .map(|s| s.nombre.clone())
            .unwrap_or_else(|| "Desconocida".to_string())
    }

    pub fn visible(&self) -> Vec<Supplier> {
        self.catalog.filtered(self.selected_store)
    }
}

pub fn create_state() -> RwSignal<SupplierListState> {
    RwSignal::new(SupplierListState::default())
}
