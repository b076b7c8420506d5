use crate::api::ApiResponse;
use crate::error::ApiError;
use crate::middleware::Resolved;
use crate::resource::Resource;

/// GET /api/{resource}/:id - return the upstream-resolved record
///
/// No store call here: the existence check already happened in the resolver
/// middleware, so this is a pure projection of the resolved entity.
pub async fn query_by_id<R: Resource>(
    Resolved(entity): Resolved<R::Entity>,
) -> Result<ApiResponse<R::View>, ApiError> {
    Ok(ApiResponse::success(R::to_view(&entity)))
}
