use contracts::domain::a001_store::Store;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{fetch_json, Verb};

pub async fn list_stores() -> Result<Vec<Store>, ApiError> {
    fetch_json(Verb::Get, "/api/tienda/listar/").await
}
