use serde::Serialize;

use crate::query::PageSpec;

/// Paged response document for collection queries.
///
/// The total is taken from a count call that is independent of the page
/// query, so under concurrent writes it may briefly disagree with the items.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument<T: Serialize> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub rows_per_page: u32,
}

impl<T: Serialize> PageDocument<T> {
    pub fn new(items: Vec<T>, total: u64, page: &PageSpec) -> Self {
        Self {
            items,
            total,
            page: page.number,
            rows_per_page: page.rows_per_page,
        }
    }
}
