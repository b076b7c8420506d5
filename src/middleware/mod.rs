pub mod resolve;

pub use resolve::{resolve_entity_middleware, Resolved};
