use std::collections::HashMap;

use crate::config::PagingConfig;
use crate::error::ApiError;

/// A validated page selection: 1-based page number and a bounded row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub number: u32,
    pub rows_per_page: u32,
}

/// Parse the `page` and `rows` request parameters into a [`PageSpec`].
///
/// Absent parameters fall back to page 1 and the configured default row
/// count. Present values must be positive integers, and `rows` must not
/// exceed the configured ceiling so a caller can never force an unbounded
/// result set.
pub fn parse(
    params: &HashMap<String, String>,
    paging: &PagingConfig,
) -> Result<PageSpec, ApiError> {
    let number = match params.get("page") {
        Some(raw) => positive(raw, "page")?,
        None => 1,
    };

    let rows_per_page = match params.get("rows") {
        Some(raw) => {
            let rows = positive(raw, "rows")?;
            if rows > paging.max_rows_per_page {
                return Err(ApiError::invalid_field(
                    "rows",
                    format!("rows per page must not exceed {}", paging.max_rows_per_page),
                ));
            }
            rows
        }
        None => paging.default_rows_per_page,
    };

    Ok(PageSpec {
        number,
        rows_per_page,
    })
}

fn positive(raw: &str, name: &str) -> Result<u32, ApiError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ApiError::invalid_field(
            name,
            format!("{} must be a positive integer", name),
        )),
    }
}
