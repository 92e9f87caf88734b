//! Ordering policy for the seasons strip
//!
//! Prequels go first, everything else after them. Within each group the
//! caller's order is kept: `sort_by_key` is a stable sort, so entries the key
//! considers equal never swap places. The caller's slice is never touched.

use crate::modules::season::domain::entities::AnimeRelation;

/// Partition an entry falls into when ordering the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationGroup {
    Prequel,
    Other,
}

impl RelationGroup {
    pub fn of(relation: &AnimeRelation) -> Self {
        if relation.is_prequel() {
            Self::Prequel
        } else {
            Self::Other
        }
    }
}

/// Return a new list with every prequel ahead of every other relation
pub fn order_relations(relations: &[AnimeRelation]) -> Vec<AnimeRelation> {
    order_relation_refs(relations)
        .into_iter()
        .cloned()
        .collect()
}

/// Same policy as [`order_relations`], borrowing instead of cloning
pub fn order_relation_refs(relations: &[AnimeRelation]) -> Vec<&AnimeRelation> {
    let mut ordered: Vec<&AnimeRelation> = relations.iter().collect();
    ordered.sort_by_key(|relation| RelationGroup::of(relation));
    ordered
}
