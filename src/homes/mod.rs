pub mod filter;
pub mod model;
pub mod store;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use serde_json::Value;

use crate::error::ApiError;
use crate::handlers::{resource_routes, AppState};
use crate::query::OrderSpec;
use crate::resource::Resource;

pub use filter::HomeFilter;
pub use model::{Home, HomeType, HomeView, NewHome, UpdateHome};
pub use store::HomeStore;

use model::{NewHomeRequest, UpdateHomeRequest};

/// The home resource: binds the generic handler pipeline to the home model
pub struct Homes;

impl Resource for Homes {
    type Entity = Home;
    type New = NewHome;
    type Update = UpdateHome;
    type View = HomeView;
    type Filter = HomeFilter;

    const NAME: &'static str = "homes";
    const SORTABLE_FIELDS: &'static [&'static str] = &["id", "name", "type", "date_created"];

    /// Homes list in ascending id order unless the request says otherwise
    fn default_order() -> OrderSpec {
        OrderSpec::asc("id")
    }

    fn decode_new(payload: Value) -> Result<NewHome, ApiError> {
        let request: NewHomeRequest = serde_json::from_value(payload)
            .map_err(|err| ApiError::invalid_json(format!("malformed home payload: {}", err)))?;
        request.validate()
    }

    fn decode_update(payload: Value) -> Result<UpdateHome, ApiError> {
        let request: UpdateHomeRequest = serde_json::from_value(payload)
            .map_err(|err| ApiError::invalid_json(format!("malformed home payload: {}", err)))?;
        request.validate()
    }

    fn parse_filter(params: &HashMap<String, String>) -> Result<HomeFilter, ApiError> {
        filter::parse(params)
    }

    fn to_view(entity: &Home) -> HomeView {
        HomeView::from(entity)
    }
}

/// Build the home routes on top of a shared store, which doubles as the
/// upstream resolver for the `:id` path segment.
pub fn router(store: Arc<HomeStore>) -> Router {
    let state = AppState::<Homes> {
        store: store.clone(),
        resolver: store,
    };
    resource_routes::<Homes>(state)
}
