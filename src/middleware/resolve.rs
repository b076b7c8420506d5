use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::AppState;
use crate::resource::Resource;
use crate::store::StoreError;

/// Entity resolved from the `:id` path segment upstream of the handler,
/// carried through request extensions.
#[derive(Clone, Debug)]
pub struct Resolved<E>(pub E);

#[async_trait]
impl<S, E> FromRequestParts<S> for Resolved<E>
where
    S: Send + Sync,
    E: Clone + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Resolved<E>>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("resolved entity missing from request extensions");
                ApiError::internal_server_error("An error occurred while processing your request")
            })
    }
}

/// Middleware that resolves the `:id` path segment into its domain entity
/// before the handler runs.
///
/// A malformed id fails validation and an unknown id yields 404. On success
/// the entity is injected into request extensions, so update, delete and
/// get-by-id all answer from this single lookup instead of re-fetching.
pub async fn resolve_entity_middleware<R: Resource>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::invalid_field("id", "ID is not in its proper form"))?;

    let entity = state.resolver.resolve(id).await.map_err(|err| match err {
        StoreError::NotFound => {
            tracing::debug!(resource = R::NAME, %id, "entity not found during resolve");
            ApiError::not_found(format!("{} {} not found", R::NAME, id))
        }
        other => other.into_api("resolve", R::NAME),
    })?;

    request.extensions_mut().insert(Resolved(entity));

    Ok(next.run(request).await)
}
