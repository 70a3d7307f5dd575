use contracts::domain::a001_store::StoreId;
use contracts::domain::a002_supplier::{Supplier, SupplierId};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{fetch_json, Verb};

/// Suppliers of one store
pub async fn list_suppliers(store_id: StoreId) -> Result<Vec<Supplier>, ApiError> {
    fetch_json(Verb::Get, &format!("/api/proveedor/listar/{}/", store_id)).await
}

pub fn supplier_options(suppliers: &[Supplier]) -> Vec<(SupplierId, String)> {
    suppliers
        .iter()
        .filter_map(|s| s.id.map(|id| (id, s.nombre.clone())))
        .collect()
}
