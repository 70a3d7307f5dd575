use crate::domain::a001_store::StoreId;
use crate::domain::common::numeric_id;
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Supplier ("proveedor") key
    SupplierId
);

/// Vendor scoped to a store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SupplierId>,
    pub nombre: String,
    /// Owning store
    pub tienda: StoreId,
}
