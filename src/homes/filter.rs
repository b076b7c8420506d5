use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::{Home, HomeType};
use crate::error::ApiError;

/// Typed filter predicates for home queries; an absent field applies no
/// predicate at all.
#[derive(Debug, Clone, Default)]
pub struct HomeFilter {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub home_type: Option<HomeType>,
    pub start_created_date: Option<DateTime<Utc>>,
    pub end_created_date: Option<DateTime<Utc>>,
}

impl HomeFilter {
    /// Whether a home satisfies every present predicate
    pub fn matches(&self, home: &Home) -> bool {
        if let Some(id) = self.id {
            if home.id != id {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !home.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(home_type) = self.home_type {
            if home.home_type != home_type {
                return false;
            }
        }
        if let Some(start) = self.start_created_date {
            if home.date_created < start {
                return false;
            }
        }
        if let Some(end) = self.end_created_date {
            if home.date_created > end {
                return false;
            }
        }
        true
    }
}

/// Parse recognized filter parameters from the query string.
///
/// Each predicate is independently optional and unrecognized parameters are
/// ignored, so new filters can be added without breaking existing callers.
/// Malformed values fail naming the offending parameter.
pub fn parse(params: &HashMap<String, String>) -> Result<HomeFilter, ApiError> {
    let mut filter = HomeFilter::default();

    if let Some(raw) = params.get("id") {
        let id = Uuid::parse_str(raw)
            .map_err(|_| ApiError::invalid_field("id", "ID is not in its proper form"))?;
        filter.id = Some(id);
    }

    if let Some(raw) = params.get("name") {
        filter.name = Some(raw.clone());
    }

    if let Some(raw) = params.get("type") {
        let home_type = HomeType::parse(raw)
            .ok_or_else(|| ApiError::invalid_field("type", "type must be one of: single, condo"))?;
        filter.home_type = Some(home_type);
    }

    if let Some(raw) = params.get("start_created_date") {
        filter.start_created_date = Some(parse_date(raw, "start_created_date")?);
    }

    if let Some(raw) = params.get("end_created_date") {
        filter.end_created_date = Some(parse_date(raw, "end_created_date")?);
    }

    Ok(filter)
}

fn parse_date(raw: &str, name: &str) -> Result<DateTime<Utc>, ApiError> {
    raw.parse::<DateTime<Utc>>()
        .map_err(|_| ApiError::invalid_field(name, "must be an RFC 3339 date-time"))
}
