use std::collections::HashMap;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A validated sort order: an allow-listed field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSpec {
    pub field: &'static str,
    pub direction: Direction,
}

impl OrderSpec {
    pub const fn asc(field: &'static str) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub const fn desc(field: &'static str) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

/// Parse the `orderBy` request parameter (`field` or `field,direction`)
/// against a per-resource allow-list.
///
/// An absent or empty directive yields the resource's documented default.
/// A field outside the allow-list or a direction other than `asc`/`desc`
/// (case-insensitive) is rejected, never silently defaulted.
pub fn parse(
    params: &HashMap<String, String>,
    allowed: &[&'static str],
    default: OrderSpec,
) -> Result<OrderSpec, ApiError> {
    let directive = match params.get("orderBy").map(|s| s.trim()) {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(default),
    };

    let mut tokens = directive.split(',').map(str::trim);
    let field_token = tokens.next().unwrap_or_default();
    let direction_token = tokens.next();

    if tokens.next().is_some() {
        return Err(ApiError::invalid_field(
            "orderBy",
            "order directive must be field or field,direction",
        ));
    }

    let field = allowed
        .iter()
        .copied()
        .find(|f| *f == field_token)
        .ok_or_else(|| {
            ApiError::invalid_field("orderBy", format!("unknown order field: {}", field_token))
        })?;

    let direction = match direction_token {
        None => Direction::Asc,
        Some(tok) if tok.eq_ignore_ascii_case("asc") => Direction::Asc,
        Some(tok) if tok.eq_ignore_ascii_case("desc") => Direction::Desc,
        Some(tok) => {
            return Err(ApiError::invalid_field(
                "orderBy",
                format!("unknown order direction: {}", tok),
            ))
        }
    };

    Ok(OrderSpec { field, direction })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTABLE: &[&str] = &["id", "name", "type", "date_created"];

    fn params(value: Option<&str>) -> HashMap<String, String> {
        let mut map = HashMap::new();
        if let Some(v) = value {
            map.insert("orderBy".to_string(), v.to_string());
        }
        map
    }

    #[test]
    fn absent_directive_yields_default() {
        let spec = parse(&params(None), SORTABLE, OrderSpec::asc("id")).unwrap();
        assert_eq!(spec, OrderSpec::asc("id"));
    }

    #[test]
    fn field_with_desc_direction() {
        let spec = parse(&params(Some("name,desc")), SORTABLE, OrderSpec::asc("id")).unwrap();
        assert_eq!(spec.field, "name");
        assert_eq!(spec.direction, Direction::Desc);
    }

    #[test]
    fn bare_field_defaults_to_ascending() {
        let spec = parse(&params(Some("date_created")), SORTABLE, OrderSpec::asc("id")).unwrap();
        assert_eq!(spec.field, "date_created");
        assert_eq!(spec.direction, Direction::Asc);
    }

    #[test]
    fn direction_is_case_insensitive() {
        let spec = parse(&params(Some("name,DESC")), SORTABLE, OrderSpec::asc("id")).unwrap();
        assert_eq!(spec.direction, Direction::Desc);
    }

    #[test]
    fn field_outside_allow_list_is_rejected() {
        let err = parse(&params(Some("bogus,asc")), SORTABLE, OrderSpec::asc("id")).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn unknown_direction_is_rejected() {
        assert!(parse(&params(Some("name,sideways")), SORTABLE, OrderSpec::asc("id")).is_err());
    }

    #[test]
    fn extra_tokens_are_rejected() {
        assert!(parse(&params(Some("name,desc,extra")), SORTABLE, OrderSpec::asc("id")).is_err());
    }

    #[test]
    fn whitespace_around_tokens_is_tolerated() {
        let spec = parse(&params(Some(" name , desc ")), SORTABLE, OrderSpec::asc("id")).unwrap();
        assert_eq!(spec.field, "name");
        assert_eq!(spec.direction, Direction::Desc);
    }
}
