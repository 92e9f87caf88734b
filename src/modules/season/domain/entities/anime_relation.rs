//! Related anime entry shown on the seasons strip

use crate::modules::season::domain::value_objects::{AnimeRelationType, WatchRoute};

/// Title variants of a related entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationTitle {
    pub romaji: String,
    pub english: String,
    pub native: String,
    /// Title in the user's preferred language, the one printed on the card
    pub user_preferred: String,
}

impl RelationTitle {
    pub fn new(user_preferred: impl Into<String>) -> Self {
        Self {
            user_preferred: user_preferred.into(),
            ..Self::default()
        }
    }
}

/// A relation from the anime being watched to another entry of the franchise
///
/// Only `id`, `relation_type`, `title.user_preferred` and `image` drive the strip;
/// everything else is carried along for the parent view.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimeRelation {
    /// AniList id of the related anime, also the list key
    pub id: u32,
    pub mal_id: Option<u32>,
    pub relation_type: AnimeRelationType,
    pub title: RelationTitle,
    pub status: Option<String>,
    pub episodes: Option<u32>,
    pub image: String,
    pub image_hash: Option<String>,
    pub cover: Option<String>,
    pub cover_hash: Option<String>,
    pub rating: Option<f32>,
    pub media_type: Option<String>,
}

impl AnimeRelation {
    pub fn new(
        id: u32,
        relation_type: AnimeRelationType,
        title: RelationTitle,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            mal_id: None,
            relation_type,
            title,
            status: None,
            episodes: None,
            image: image.into(),
            image_hash: None,
            cover: None,
            cover_hash: None,
            rating: None,
            media_type: None,
        }
    }

    pub fn is_prequel(&self) -> bool {
        self.relation_type.is_prequel()
    }

    pub fn display_title(&self) -> &str {
        &self.title.user_preferred
    }

    pub fn watch_route(&self) -> WatchRoute {
        WatchRoute::new(self.id)
    }
}
