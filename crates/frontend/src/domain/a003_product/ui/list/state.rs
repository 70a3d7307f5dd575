use contracts::domain::a001_store::{Store, StoreId};
use contracts::domain::a002_supplier::{Supplier, SupplierId};
use contracts::domain::a003_product::{Product, ProductId};
use leptos::prelude::*;

use crate::domain::a001_store::sample::{sample_products, sample_stores, sample_suppliers};
use crate::shared::local_catalog::{CatalogEntry, LocalCatalog};

impl CatalogEntry for Product {
    type ParentId = SupplierId;

    fn key(&self) -> Option<i64> {
        self.id.map(|id| id.value())
    }
    fn name(&self) -> &str {
        &self.nombre
    }
    fn parent(&self) -> SupplierId {
        self.proveedor
    }
    fn renamed(&self, nombre: String) -> Self {
        Self { nombre, ..self.clone() }
    }
    fn create(key: i64, nombre: String, proveedor: SupplierId) -> Self {
        Self {
            id: Some(ProductId(key)),
            nombre,
            proveedor,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub stores: Vec<Store>,
    pub suppliers: Vec<Supplier>,
    pub catalog: LocalCatalog<Product>,
    pub selected_store: Option<StoreId>,
    pub selected_supplier: Option<SupplierId>,
    pub editing: Option<i64>,
    pub creating: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            stores: sample_stores(),
            suppliers: sample_suppliers(),
            catalog: LocalCatalog::new(sample_products()),
            selected_store: None,
            selected_supplier: None,
            editing: None,
            creating: false,
        }
    }
}

impl ProductListState {
    /// Changing the store clears the supplier filter
    pub fn select_store(&mut self, store: Option<StoreId>) {
        self.selected_store = store;
        self.selected_supplier = None;
    }

    /// Suppliers offered by the second filter
    pub fn suppliers_of_store(&self) -> Vec<Supplier> {
        self.suppliers
            .iter()
            .filter(|s| self.selected_store.map_or(true, |t| s.tienda == t))
            .cloned()
            .collect()
    }

    pub fn supplier_name(&self, id: SupplierId) -> String {
        self.suppliers
            .iter()
            .find(|s| s.id == Some(id))
            .map(|s| s.nombre.clone())
            .unwrap_or_default()
    }

    pub fn visible(&self) -> Vec<Product> {
        self.catalog.filtered(self.selected_supplier)
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_change_resets_supplier() {
        let mut state = ProductListState::default();
        state.select_store(Some(StoreId(1)));
        state.selected_supplier = Some(SupplierId(2));
        state.select_store(Some(StoreId(2)));
        assert_eq!(state.selected_supplier, None);
        let names: Vec<_> = state.suppliers_of_store().into_iter().map(|s| s.nombre).collect();
        assert_eq!(names, vec!["Proveedor 123"]);
    }

    #[test]
    fn supplier_filter_narrows_products() {
        let mut state = ProductListState::default();
        assert_eq!(state.visible().len(), 4);
        state.selected_supplier = Some(SupplierId(1));
        let names: Vec<_> = state.visible().into_iter().map(|p| p.nombre).collect();
        assert_eq!(names, vec!["Producto A", "Producto B"]);
        assert_eq!(state.supplier_name(SupplierId(3)), "Proveedor 123");
    }

    #[test]
    fn creating_requires_a_supplier() {
        let mut state = ProductListState::default();
        assert!(state.catalog.create("Producto E", state.selected_supplier).is_err());
        state.selected_supplier = Some(SupplierId(3));
        assert_eq!(state.catalog.create("Producto E", state.selected_supplier), Ok(5));
    }
}
