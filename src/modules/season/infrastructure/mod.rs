pub mod channel_navigator;
pub mod mapper;
pub mod models;

pub use channel_navigator::{ChannelNavigator, NavigationRequest};
pub use mapper::RelationMapper;
pub use models::{RelationDto, RelationTitleDto};
