pub mod season_card;

pub use season_card::{RelationLabelStyle, SeasonCard};
