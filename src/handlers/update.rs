use axum::{body::Bytes, extract::State};

use super::{decode_value, AppState};
use crate::api::ApiResponse;
use crate::error::ApiError;
use crate::middleware::Resolved;
use crate::resource::Resource;

/// PATCH /api/{resource}/:id - apply a partial update to the resolved record
///
/// The entity arrives pre-resolved from the upstream middleware; fields
/// absent from the payload are left untouched by the store.
pub async fn update<R: Resource>(
    State(state): State<AppState<R>>,
    Resolved(entity): Resolved<R::Entity>,
    body: Bytes,
) -> Result<ApiResponse<R::View>, ApiError> {
    let payload = decode_value(&body)?;
    let update = R::decode_update(payload)?;

    let entity = state
        .store
        .update(entity, update)
        .await
        .map_err(|err| err.into_api("update", R::NAME))?;

    Ok(ApiResponse::success(R::to_view(&entity)))
}
