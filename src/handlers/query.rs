use std::collections::HashMap;

use axum::extract::{Query, State};

use super::AppState;
use crate::api::{ApiResponse, PageDocument};
use crate::config;
use crate::error::ApiError;
use crate::query::{order, page};
use crate::resource::Resource;

/// GET /api/{resource} - list records with paging, filtering and ordering
///
/// Page, filter and order are parsed in that order and the first failure
/// wins. The page query and the total count are two independent store calls.
pub async fn query<R: Resource>(
    State(state): State<AppState<R>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ApiResponse<PageDocument<R::View>>, ApiError> {
    let page = page::parse(&params, &config::config().paging)?;
    let filter = R::parse_filter(&params)?;
    let order = order::parse(&params, R::SORTABLE_FIELDS, R::default_order())?;

    let items = state
        .store
        .query(&filter, &order, &page)
        .await
        .map_err(|err| err.into_api("query", R::NAME))?;

    let total = state
        .store
        .count(&filter)
        .await
        .map_err(|err| err.into_api("count", R::NAME))?;

    let views = items.iter().map(R::to_view).collect();

    Ok(ApiResponse::success(PageDocument::new(views, total, &page)))
}
