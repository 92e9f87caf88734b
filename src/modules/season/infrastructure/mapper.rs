use super::models::{RelationDto, RelationTitleDto};
use crate::modules::season::domain::{AnimeRelation, AnimeRelationType, RelationTitle};
use crate::shared::errors::AppResult;

/// Maps relation payloads from the watch page into domain relations
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationMapper;

impl RelationMapper {
    /// Decode a JSON array of relations
    pub fn from_json(payload: &str) -> AppResult<Vec<AnimeRelation>> {
        let dtos: Vec<RelationDto> = serde_json::from_str(payload)?;
        Ok(Self::to_domain_list(dtos))
    }

    pub fn to_domain_list(dtos: Vec<RelationDto>) -> Vec<AnimeRelation> {
        dtos.into_iter().map(Self::to_domain).collect()
    }

    pub fn to_domain(dto: RelationDto) -> AnimeRelation {
        let relation_type = AnimeRelationType::from_tag(&dto.relation_type);
        if !relation_type.is_known() {
            log::warn!(
                "Unknown relation type '{}' for anime {}, treating it as a non-prequel",
                dto.relation_type,
                dto.id
            );
        }

        AnimeRelation {
            id: dto.id,
            mal_id: dto.mal_id,
            relation_type,
            title: dto.title.map(Self::map_title).unwrap_or_default(),
            status: dto.status,
            episodes: dto.episodes,
            image: dto.image.unwrap_or_default(),
            image_hash: dto.image_hash,
            cover: dto.cover,
            cover_hash: dto.cover_hash,
            rating: dto.rating,
            media_type: dto.media_type,
        }
    }

    fn map_title(title: RelationTitleDto) -> RelationTitle {
        RelationTitle {
            romaji: title.romaji.unwrap_or_default(),
            english: title.english.unwrap_or_default(),
            native: title.native.unwrap_or_default(),
            user_preferred: title.user_preferred.unwrap_or_default(),
        }
    }
}
