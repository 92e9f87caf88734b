use crate::modules::season::{
    application::{
        dto::{RelationLabelStyle, SeasonCard},
        ports::Navigator,
    },
    domain::{order_relation_refs, order_relations, AnimeRelation, WatchRoute},
    infrastructure::RelationMapper,
};
use crate::shared::{config::SeasonsConfig, errors::AppResult, utils::LogContext};
use std::collections::HashSet;
use std::sync::Arc;

/// Seasons strip of the watch page
///
/// Stateless apart from its collaborators: every render is a pure function of
/// the relations passed in, and `select` is the only side effect.
pub struct SeasonsView {
    navigator: Arc<dyn Navigator>,
    label_style: RelationLabelStyle,
}

impl SeasonsView {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            label_style: RelationLabelStyle::default(),
        }
    }

    pub fn from_config(navigator: Arc<dyn Navigator>, config: &SeasonsConfig) -> Self {
        Self::new(navigator).with_label_style(config.label_style)
    }

    pub fn with_label_style(mut self, label_style: RelationLabelStyle) -> Self {
        self.label_style = label_style;
        self
    }

    pub fn label_style(&self) -> RelationLabelStyle {
        self.label_style
    }

    /// Prequels first, everything else after, caller's list untouched
    pub fn order(&self, relations: &[AnimeRelation]) -> Vec<AnimeRelation> {
        order_relations(relations)
    }

    /// Build one card per relation in strip order
    pub fn render(&self, relations: &[AnimeRelation]) -> Vec<SeasonCard> {
        let ordered = order_relation_refs(relations);
        let prequels = ordered.iter().take_while(|r| r.is_prequel()).count();
        LogContext::render_pass(ordered.len(), prequels);

        let mut seen = HashSet::with_capacity(ordered.len());
        ordered
            .into_iter()
            .map(|relation| {
                if !seen.insert(relation.id) {
                    log::warn!(
                        "Duplicate relation id {} on seasons strip, card keys will collide",
                        relation.id
                    );
                }
                SeasonCard::from_relation(relation, self.label_style)
            })
            .collect()
    }

    /// Decode the parent view's relations payload and render it
    pub fn render_json(&self, payload: &str) -> AppResult<Vec<SeasonCard>> {
        let relations = RelationMapper::from_json(payload).map_err(|e| {
            LogContext::error_with_context(&e, "Failed to decode seasons payload");
            e
        })?;
        Ok(self.render(&relations))
    }

    /// Navigate to the detail route of `relation_id`
    pub fn select(&self, relation_id: u32) {
        let path = WatchRoute::new(relation_id).path();
        LogContext::navigation(&path);
        self.navigator.go_to(&path);
    }

    pub fn select_card(&self, card: &SeasonCard) {
        self.select(card.key);
    }
}

impl std::fmt::Debug for SeasonsView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeasonsView")
            .field("label_style", &self.label_style)
            .finish_non_exhaustive()
    }
}
