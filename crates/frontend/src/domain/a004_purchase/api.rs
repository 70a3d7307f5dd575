use contracts::domain::a004_purchase::{
    Detail, DetailCreate, DetailId, DetailUpdate, Purchase, PurchaseCreate, PurchaseId,
    PurchaseRangeQuery, PurchaseScope,
};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{fetch_json, send_empty, send_json, Verb};

/// Path of the range listing, scoped when both store and supplier are known
pub fn range_path(query: &PurchaseRangeQuery, scope: Option<PurchaseScope>) -> String {
    let base = match scope {
        Some(s) => format!("/api/compra/rango/{}/{}/", s.tienda_id, s.proveedor_id),
        None => "/api/compra/rango/".to_string(),
    };
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", base, qs),
        Ok(_) => base,
        Err(e) => {
            log::warn!("range query not encodable: {}", e);
            format!("{}?limit={}", base, query.limit)
        }
    }
}

/// Create a purchase; the backend adds zero-valued details for the supplier's products
pub async fn create_purchase(body: &PurchaseCreate) -> Result<Purchase, ApiError> {
    send_json(Verb::Post, "/api/compra/crear/", body).await
}

/// Partial update of one purchase line
pub async fn edit_detail(detail_id: DetailId, body: &DetailUpdate) -> Result<Detail, ApiError> {
    let path = format!("/api/compra/detalle/editar/{}/", detail_id);
    send_json(Verb::Patch, &path, body).await
}

pub async fn create_detail(purchase_id: PurchaseId, body: &DetailCreate) -> Result<Detail, ApiError> {
    let path = format!("/api/compra/detalle/crear/{}/", purchase_id);
    send_json(Verb::Post, &path, body).await
}

pub async fn delete_detail(detail_id: DetailId) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &format!("/api/compra/detalle/eliminar/{}/", detail_id)).await
}

/// Purchases inside the date range, at most `query.limit`
pub async fn purchases_by_range(
    query: &PurchaseRangeQuery,
    scope: Option<PurchaseScope>,
) -> Result<Vec<Purchase>, ApiError> {
    fetch_json(Verb::Get, &range_path(query, scope)).await
}

pub async fn delete_purchase(purchase_id: PurchaseId) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &format!("/api/compra/eliminar/{}/", purchase_id)).await
}
