//! Seed catalog for the local supplier and product screens

use contracts::domain::a001_store::{Store, StoreId};
use contracts::domain::a002_supplier::{Supplier, SupplierId};
use contracts::domain::a003_product::{Product, ProductId};

pub fn sample_stores() -> Vec<Store> {
    vec![
        Store { id: Some(StoreId(1)), nombre: "Tienda Centro".into() },
        Store { id: Some(StoreId(2)), nombre: "Tienda Norte".into() },
    ]
}

pub fn sample_suppliers() -> Vec<Supplier> {
    [(1, "Proveedor ABC", 1), (2, "Proveedor XYZ", 1), (3, "Proveedor 123", 2)]
        .into_iter()
        .map(|(id, nombre, tienda)| Supplier {
            id: Some(SupplierId(id)),
            nombre: nombre.into(),
            tienda: StoreId(tienda),
        })
        .collect()
}

pub fn sample_products() -> Vec<Product> {
    [(1, "Producto A", 1), (2, "Producto B", 1), (3, "Producto C", 2), (4, "Producto D", 3)]
        .into_iter()
        .map(|(id, nombre, proveedor)| Product {
            id: Some(ProductId(id)),
            nombre: nombre.into(),
            proveedor: SupplierId(proveedor),
        })
        .collect()
}

/// Options for an `IdSelect` of stores
pub fn store_options(stores: &[Store]) -> Vec<(StoreId, String)> {
    stores
        .iter()
        .filter_map(|s| s.id.map(|id| (id, s.nombre.clone())))
        .collect()
}
