use crate::domain::a002_supplier::SupplierId;
use crate::domain::a003_product::ProductId;
use crate::domain::common::numeric_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Purchase ("compra") key
    PurchaseId
);

numeric_id!(
    /// Purchase line ("detalle") key
    DetailId
);

/// One product's line within a purchase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Detail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DetailId>,

    pub producto: ProductId,

    /// Display name, filled in by the backend when it joins the product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producto_nombre: Option<String>,

    /// Units bought
    pub cantidad: i64,

    /// Stock on hand before this purchase
    pub inventario_anterior: i64,
}

impl Detail {
    /// Stock after the purchase. Never stored, always derived.
    pub fn new_inventory(&self) -> i64 {
        self.inventario_anterior.saturating_add(self.cantidad)
    }

    /// Product label for tables, falls back to the product key.
    pub fn display_name(&self) -> String {
        match self.producto_nombre.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Producto {}", self.producto),
        }
    }
}

/// Dated stock-intake event for one supplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PurchaseId>,

    pub proveedor: SupplierId,

    /// Calendar date, `YYYY-MM-DD` on the wire
    pub fecha_compra: NaiveDate,

    #[serde(default)]
    pub detalles: Vec<Detail>,
}

impl Purchase {
    pub fn total_quantity(&self) -> i64 {
        self.detalles
            .iter()
            .fold(0i64, |acc, d| acc.saturating_add(d.cantidad))
    }
}
