pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{Navigator, RelationLabelStyle, SeasonCard, SeasonsView};
pub use domain::{order_relations, AnimeRelation, AnimeRelationType, RelationTitle, WatchRoute};
pub use infrastructure::{ChannelNavigator, NavigationRequest, RelationMapper};
