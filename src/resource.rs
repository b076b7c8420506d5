use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::query::OrderSpec;

/// Capability interface a domain resource supplies to the generic handler
/// pipeline: payload transcoding, filter parsing, and sort metadata.
///
/// Implementing this trait for a new resource type is all it takes to reuse
/// the full create/update/delete/query/get handler set.
pub trait Resource: Send + Sync + 'static {
    /// Canonical domain representation, owned by the store layer.
    type Entity: Clone + Send + Sync + 'static;
    /// Attributes required to create an instance.
    type New: Send + 'static;
    /// Sparse set of attribute changes, applied as a partial patch.
    type Update: Send + 'static;
    /// Outbound projection of `Entity` shaped for the wire.
    type View: Serialize + Send + 'static;
    /// Typed, validated filter predicate set.
    type Filter: Default + Send + Sync + 'static;

    /// Resource segment used in routes and log context.
    const NAME: &'static str;
    /// Fields the order directive may reference.
    const SORTABLE_FIELDS: &'static [&'static str];

    /// Order applied when the request carries no directive.
    fn default_order() -> OrderSpec;

    /// Decode and validate a creation payload.
    fn decode_new(payload: Value) -> Result<Self::New, ApiError>;

    /// Decode and validate a partial-update payload.
    fn decode_update(payload: Value) -> Result<Self::Update, ApiError>;

    /// Parse recognized filter parameters; unrecognized ones are ignored.
    fn parse_filter(params: &HashMap<String, String>) -> Result<Self::Filter, ApiError>;

    /// Pure projection of an entity into its wire shape. Must not fail.
    fn to_view(entity: &Self::Entity) -> Self::View;
}
