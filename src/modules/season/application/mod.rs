pub mod dto;
pub mod ports;
pub mod service;

pub use dto::{RelationLabelStyle, SeasonCard};
pub use ports::Navigator;
pub use service::SeasonsView;
