//! Season strip value objects

pub mod relation_type;
pub mod watch_route;

pub use relation_type::AnimeRelationType;
pub use watch_route::{WatchRoute, WATCH_ROUTE_PREFIX};
