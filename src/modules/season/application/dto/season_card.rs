use crate::modules::season::domain::AnimeRelation;
use serde::{Deserialize, Serialize};
use specta::Type;

/// Which text goes into the relation label of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub enum RelationLabelStyle {
    /// Provider tag as-is ("PREQUEL", "SIDE_STORY")
    Tag,
    /// Human readable name ("Prequel", "Side Story")
    Display,
}

impl Default for RelationLabelStyle {
    fn default() -> Self {
        Self::Tag
    }
}

/// One clickable card of the seasons strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct SeasonCard {
    /// Relation id, unique within one strip and used as the list key
    pub key: u32,
    pub relation_label: String,
    pub title: String,
    /// Decorative background artwork
    pub background_image: String,
    /// Route requested when the card is clicked
    pub route: String,
}

impl SeasonCard {
    pub fn from_relation(relation: &AnimeRelation, style: RelationLabelStyle) -> Self {
        let relation_label = match style {
            RelationLabelStyle::Tag => relation.relation_type.as_tag(),
            RelationLabelStyle::Display => relation.relation_type.display_name(),
        };

        Self {
            key: relation.id,
            relation_label: relation_label.to_string(),
            title: relation.display_title().to_string(),
            background_image: relation.image.clone(),
            route: relation.watch_route().path(),
        }
    }
}
