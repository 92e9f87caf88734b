pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{AnimeRelation, RelationTitle};
pub use services::relation_ordering::{order_relation_refs, order_relations, RelationGroup};
pub use value_objects::{AnimeRelationType, WatchRoute};
