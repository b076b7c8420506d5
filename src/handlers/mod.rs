pub mod create;
pub mod delete;
pub mod query;
pub mod query_by_id;
pub mod update;

use std::sync::Arc;

use axum::{body::Bytes, middleware, routing::get, Router};
use serde_json::Value;

use crate::error::ApiError;
use crate::middleware::resolve_entity_middleware;
use crate::resource::Resource;
use crate::store::{Resolver, Store};

/// Per-resource wiring handed to the generic handler set: the store behind
/// the CRUD contract and the upstream resolver behind the `:id` lookup.
pub struct AppState<R: Resource> {
    pub store: Arc<dyn Store<R>>,
    pub resolver: Arc<dyn Resolver<R::Entity>>,
}

impl<R: Resource> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            resolver: Arc::clone(&self.resolver),
        }
    }
}

/// Build the full route set for one resource type under `/api/{name}`.
///
/// Item routes run behind the resolver middleware, so their handlers always
/// receive an already-resolved entity.
pub fn resource_routes<R: Resource>(state: AppState<R>) -> Router {
    let routes = Router::new()
        .route("/", get(query::query::<R>).post(create::create::<R>))
        .merge(
            Router::new()
                .route(
                    "/:id",
                    get(query_by_id::query_by_id::<R>)
                        .patch(update::update::<R>)
                        .delete(delete::delete::<R>),
                )
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    resolve_entity_middleware::<R>,
                )),
        )
        .with_state(state);

    Router::new().nest(&format!("/api/{}", R::NAME), routes)
}

/// Parse a raw request body into JSON, mapping syntax failures to the
/// decode-error class.
pub(crate) fn decode_value(body: &Bytes) -> Result<Value, ApiError> {
    serde_json::from_slice(body)
        .map_err(|err| ApiError::invalid_json(format!("malformed JSON payload: {}", err)))
}
