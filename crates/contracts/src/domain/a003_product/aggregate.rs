use crate::domain::a002_supplier::SupplierId;
use crate::domain::common::numeric_id;
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Product ("producto") key
    ProductId
);

/// Item scoped to a supplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub nombre: String,
    /// Supplying vendor
    pub proveedor: SupplierId,
}
