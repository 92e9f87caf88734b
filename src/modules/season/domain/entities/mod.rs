pub mod anime_relation;

pub use anime_relation::{AnimeRelation, RelationTitle};
