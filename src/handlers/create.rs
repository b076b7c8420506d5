use axum::{body::Bytes, extract::State};

use super::{decode_value, AppState};
use crate::api::ApiResponse;
use crate::error::ApiError;
use crate::resource::Resource;

/// POST /api/{resource} - create a new record from the request payload
pub async fn create<R: Resource>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<ApiResponse<R::View>, ApiError> {
    let payload = decode_value(&body)?;
    let new = R::decode_new(payload)?;

    let entity = state
        .store
        .create(new)
        .await
        .map_err(|err| err.into_api("create", R::NAME))?;

    Ok(ApiResponse::created(R::to_view(&entity)))
}
