use contracts::domain::a002_supplier::SupplierId;
use contracts::domain::a003_product::{Product, ProductId};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{fetch_json, Verb};

/// Products of one supplier
pub async fn list_products(supplier_id: SupplierId) -> Result<Vec<Product>, ApiError> {
    fetch_json(Verb::Get, &format!("/api/producto/listar/{}/", supplier_id)).await
}

pub fn product_options(products: &[Product]) -> Vec<(ProductId, String)> {
    products
        .iter()
        .filter_map(|p| p.id.map(|id| (id, p.nombre.clone())))
        .collect()
}
