//! Wire models of the relations payload held by the watch page
//!
//! Field names follow the camelCase JSON of the relations API. Display fields
//! are optional on the wire; the mapper fills in empty values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelationTitleDto {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
    #[serde(default)]
    pub user_preferred: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelationDto {
    pub id: u32,
    #[serde(default)]
    pub mal_id: Option<u32>,
    #[serde(default)]
    pub relation_type: String,
    #[serde(default)]
    pub title: Option<RelationTitleDto>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_hash: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub cover_hash: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
}
