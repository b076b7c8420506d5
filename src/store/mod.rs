use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::query::{OrderSpec, PageSpec};
use crate::resource::Resource;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Classify a store failure into the transport error taxonomy.
    ///
    /// Classification is by variant. Opaque causes are logged with operation
    /// context for operators and replaced by a generic message on the wire.
    pub fn into_api(self, operation: &str, resource: &str) -> ApiError {
        match self {
            StoreError::NotFound => ApiError::not_found(format!("{} not found", resource)),
            StoreError::Conflict(msg) => ApiError::conflict(msg),
            StoreError::Other(err) => {
                tracing::error!(operation, resource, error = %err, "store failure");
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

/// Narrow CRUD-plus-count contract the handler pipeline consumes.
///
/// `query` and `count` are independent calls with no atomicity between them;
/// under concurrent writes the returned page and the total may disagree.
#[async_trait]
pub trait Store<R: Resource>: Send + Sync {
    async fn create(&self, new: R::New) -> Result<R::Entity, StoreError>;

    async fn update(&self, entity: R::Entity, update: R::Update) -> Result<R::Entity, StoreError>;

    async fn delete(&self, entity: R::Entity) -> Result<(), StoreError>;

    async fn query(
        &self,
        filter: &R::Filter,
        order: &OrderSpec,
        page: &PageSpec,
    ) -> Result<Vec<R::Entity>, StoreError>;

    async fn count(&self, filter: &R::Filter) -> Result<u64, StoreError>;
}

/// Upstream lookup consumed by the resolver middleware.
///
/// Kept separate from [`Store`] so handlers never re-fetch by id themselves;
/// the resolved entity travels to them through request extensions.
#[async_trait]
pub trait Resolver<E>: Send + Sync {
    async fn resolve(&self, id: Uuid) -> Result<E, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = StoreError::NotFound.into_api("update", "home");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = StoreError::Conflict("home name already in use".into()).into_api("create", "home");
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.message(), "home name already in use");
    }

    #[test]
    fn opaque_failure_maps_to_generic_500() {
        let err = StoreError::Other(anyhow::anyhow!("connection reset by peer"))
            .into_api("query", "home");
        assert_eq!(err.status_code(), 500);
        assert!(!err.message().contains("connection reset"));
    }
}
