use crate::domain::a001_store::StoreId;
use crate::domain::a002_supplier::SupplierId;
use crate::domain::a003_product::ProductId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/compra/crear/`.
///
/// The backend generates a zero-valued detail for every product of the supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseCreate {
    pub proveedor_id: SupplierId,
    pub fecha_compra: NaiveDate,
}

/// Body of `PATCH /api/compra/detalle/editar/{id}/`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailUpdate {
    pub cantidad: i64,
    pub inventario_anterior: i64,
}

/// Body of `POST /api/compra/detalle/crear/{purchase_id}/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailCreate {
    pub producto_id: ProductId,
    pub cantidad: i64,
    pub inventario_anterior: i64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

pub const DEFAULT_RANGE_LIMIT: u32 = 3;

/// Query string of `GET /api/compra/rango/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRangeQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<NaiveDate>,
    pub limit: u32,
    #[serde(default)]
    pub order: SortOrder,
}

impl Default for PurchaseRangeQuery {
    fn default() -> Self {
        Self {
            fecha_inicio: None,
            fecha_fin: None,
            limit: DEFAULT_RANGE_LIMIT,
            order: SortOrder::default(),
        }
    }
}

/// Narrows the range listing to one store's supplier. Only used when both
/// keys are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseScope {
    pub tienda_id: StoreId,
    pub proveedor_id: SupplierId,
}

impl PurchaseScope {
    pub fn from_parts(tienda_id: Option<StoreId>, proveedor_id: Option<SupplierId>) -> Option<Self> {
        Some(Self {
            tienda_id: tienda_id?,
            proveedor_id: proveedor_id?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_update_uses_backend_field_names() {
        let body = DetailUpdate {
            cantidad: 25,
            inventario_anterior: 65,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"cantidad": 25, "inventario_anterior": 65})
        );
    }

    #[test]
    fn purchase_create_serializes_iso_date() {
        let body = PurchaseCreate {
            proveedor_id: SupplierId(2),
            fecha_compra: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"proveedor_id": 2, "fecha_compra": "2024-03-05"})
        );
    }

    #[test]
    fn default_query_asks_for_three_newest() {
        let query = PurchaseRangeQuery::default();
        assert_eq!(query.limit, 3);
        assert_eq!(query.order, SortOrder::Desc);
        assert!(query.fecha_inicio.is_none() && query.fecha_fin.is_none());
    }

    #[test]
    fn scope_requires_both_keys() {
        assert!(PurchaseScope::from_parts(Some(StoreId(1)), None).is_none());
        assert!(PurchaseScope::from_parts(None, Some(SupplierId(1))).is_none());
        assert_eq!(
            PurchaseScope::from_parts(Some(StoreId(1)), Some(SupplierId(2))),
            Some(PurchaseScope {
                tienda_id: StoreId(1),
                proveedor_id: SupplierId(2)
            })
        );
    }

    #[test]
    fn sort_order_round_trips_through_text() {
        assert_eq!(SortOrder::parse(SortOrder::Asc.as_str()), SortOrder::Asc);
        assert_eq!(SortOrder::parse("anything"), SortOrder::Desc);
    }
}
