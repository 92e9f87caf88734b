/// Test data factories using builder pattern
///
/// Provides convenient methods to create relations with sensible defaults
use miru_seasons_lib::modules::season::domain::{AnimeRelation, AnimeRelationType, RelationTitle};

pub struct RelationFactory {
    id: u32,
    relation_type: String,
    title: String,
    image: Option<String>,
    episodes: Option<u32>,
}

impl Default for RelationFactory {
    fn default() -> Self {
        let id = rand::random::<u32>() % 1000000 + 1000;
        Self {
            id,
            relation_type: "SEQUEL".to_string(),
            title: format!("Test Anime {}", id),
            image: None,
            episodes: None,
        }
    }
}

impl RelationFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn relation_type(mut self, tag: &str) -> Self {
        self.relation_type = tag.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn image(mut self, url: &str) -> Self {
        self.image = Some(url.to_string());
        self
    }

    pub fn episodes(mut self, episodes: u32) -> Self {
        self.episodes = Some(episodes);
        self
    }

    pub fn build(self) -> AnimeRelation {
        let image = self
            .image
            .unwrap_or_else(|| format!("https://img.example/{}.jpg", self.id));
        let mut relation = AnimeRelation::new(
            self.id,
            AnimeRelationType::from_tag(&self.relation_type),
            RelationTitle::new(self.title),
            image,
        );
        relation.episodes = self.episodes;
        relation
    }
}

/// Build a list from `(id, relation tag)` pairs
pub fn relations(entries: &[(u32, &str)]) -> Vec<AnimeRelation> {
    entries
        .iter()
        .map(|(id, tag)| RelationFactory::new().id(*id).relation_type(tag).build())
        .collect()
}

/// Random list with unique ids and a mix of relation tags
pub fn random_relations(len: usize) -> Vec<AnimeRelation> {
    const TAGS: [&str; 6] = [
        "PREQUEL",
        "SEQUEL",
        "SIDE_STORY",
        "ALTERNATIVE",
        "SPIN_OFF",
        "MUSIC_VIDEO",
    ];

    (0..len)
        .map(|i| {
            let tag = TAGS[rand::random::<usize>() % TAGS.len()];
            RelationFactory::new()
                .id(i as u32 + 1)
                .relation_type(tag)
                .build()
        })
        .collect()
}

pub fn ids(relations: &[AnimeRelation]) -> Vec<u32> {
    relations.iter().map(|r| r.id).collect()
}
