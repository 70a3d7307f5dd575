use crate::domain::common::numeric_id;
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Store ("tienda") key
    StoreId
);

/// Physical or business location that owns suppliers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StoreId>,
    pub nombre: String,
}
