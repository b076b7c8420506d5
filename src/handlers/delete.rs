use axum::extract::State;

use super::AppState;
use crate::api::ApiResponse;
use crate::error::ApiError;
use crate::middleware::Resolved;
use crate::resource::Resource;

/// DELETE /api/{resource}/:id - remove the resolved record
pub async fn delete<R: Resource>(
    State(state): State<AppState<R>>,
    Resolved(entity): Resolved<R::Entity>,
) -> Result<ApiResponse<()>, ApiError> {
    state
        .store
        .delete(entity)
        .await
        .map_err(|err| err.into_api("delete", R::NAME))?;

    Ok(ApiResponse::<()>::no_content())
}
