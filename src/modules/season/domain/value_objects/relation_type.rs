use serde::{Deserialize, Serialize};

/// Relation of a linked entry to the anime being watched
///
/// Known variants match AniList's `MediaRelation` tags exactly, one tag per
/// variant. Anything else, including a differently cased or spaced spelling,
/// is kept verbatim in `Unknown`, so `as_tag` always returns the input tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimeRelationType {
    Prequel,
    Sequel,
    SideStory,
    SpinOff,
    Alternative,
    Summary,
    Special,
    Movie,
    ParentStory,
    FullStory,
    Source,
    Adaptation,
    Compilation,
    Contains,
    Character,
    Other,
    Unknown(String),
}

impl AnimeRelationType {
    /// Parse a provider tag, exact match only
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PREQUEL" => Self::Prequel,
            "SEQUEL" => Self::Sequel,
            "SIDE_STORY" => Self::SideStory,
            "SPIN_OFF" => Self::SpinOff,
            "ALTERNATIVE" => Self::Alternative,
            "SUMMARY" => Self::Summary,
            "SPECIAL" => Self::Special,
            "MOVIE" => Self::Movie,
            "PARENT" => Self::ParentStory,
            "FULL_STORY" => Self::FullStory,
            "SOURCE" => Self::Source,
            "ADAPTATION" => Self::Adaptation,
            "COMPILATION" => Self::Compilation,
            "CONTAINS" => Self::Contains,
            "CHARACTER" => Self::Character,
            "OTHER" => Self::Other,
            _ => Self::Unknown(tag.to_string()),
        }
    }

    /// Tag exactly as the provider sent it
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Prequel => "PREQUEL",
            Self::Sequel => "SEQUEL",
            Self::SideStory => "SIDE_STORY",
            Self::SpinOff => "SPIN_OFF",
            Self::Alternative => "ALTERNATIVE",
            Self::Summary => "SUMMARY",
            Self::Special => "SPECIAL",
            Self::Movie => "MOVIE",
            Self::ParentStory => "PARENT",
            Self::FullStory => "FULL_STORY",
            Self::Source => "SOURCE",
            Self::Adaptation => "ADAPTATION",
            Self::Compilation => "COMPILATION",
            Self::Contains => "CONTAINS",
            Self::Character => "CHARACTER",
            Self::Other => "OTHER",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Prequel => "Prequel",
            Self::Sequel => "Sequel",
            Self::SideStory => "Side Story",
            Self::SpinOff => "Spin-off",
            Self::Alternative => "Alternative Version",
            Self::Summary => "Summary",
            Self::Special => "Special",
            Self::Movie => "Movie",
            Self::ParentStory => "Parent Story",
            Self::FullStory => "Full Story",
            Self::Source => "Source",
            Self::Adaptation => "Adaptation",
            Self::Compilation => "Compilation",
            Self::Contains => "Contains",
            Self::Character => "Shared Character",
            Self::Other => "Other",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_prequel(&self) -> bool {
        matches!(self, Self::Prequel)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for AnimeRelationType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for AnimeRelationType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<AnimeRelationType> for String {
    fn from(relation_type: AnimeRelationType) -> Self {
        match relation_type {
            AnimeRelationType::Unknown(tag) => tag,
            known => known.as_tag().to_string(),
        }
    }
}

impl std::fmt::Display for AnimeRelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_matches_exact_tags() {
        assert_eq!(AnimeRelationType::from_tag("PREQUEL"), AnimeRelationType::Prequel);
        assert_eq!(AnimeRelationType::from_tag("SIDE_STORY"), AnimeRelationType::SideStory);
        assert_eq!(AnimeRelationType::from_tag("PARENT"), AnimeRelationType::ParentStory);
    }

    #[test]
    fn test_near_miss_tags_are_unknown() {
        for tag in ["prequel", "Prequel", " PREQUEL ", "PARENT_STORY", "Spin-Off"] {
            let relation_type = AnimeRelationType::from_tag(tag);
            assert_eq!(relation_type, AnimeRelationType::Unknown(tag.to_string()));
            assert!(!relation_type.is_prequel(), "{:?} must not be a prequel", tag);
        }
    }

    #[test]
    fn test_as_tag_returns_input() {
        for tag in ["PREQUEL", "PARENT", "PARENT_STORY", "Spin-Off", "Recap Special"] {
            assert_eq!(AnimeRelationType::from_tag(tag).as_tag(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_kept_verbatim() {
        let relation_type = AnimeRelationType::from_tag("Recap Special");
        assert_eq!(relation_type, AnimeRelationType::Unknown("Recap Special".to_string()));
        assert_eq!(relation_type.as_tag(), "Recap Special");
        assert_eq!(relation_type.display_name(), "Recap Special");
        assert!(!relation_type.is_known());
        assert!(!relation_type.is_prequel());
    }

    #[test]
    fn test_only_prequel_is_prequel() {
        assert!(AnimeRelationType::Prequel.is_prequel());
        assert!(!AnimeRelationType::Sequel.is_prequel());
        assert!(!AnimeRelationType::ParentStory.is_prequel());
    }

    #[test]
    fn test_serde_uses_tag_strings() {
        let json = serde_json::to_string(&AnimeRelationType::SideStory).unwrap();
        assert_eq!(json, "\"SIDE_STORY\"");

        let parsed: AnimeRelationType = serde_json::from_str("\"PREQUEL\"").unwrap();
        assert_eq!(parsed, AnimeRelationType::Prequel);

        for tag in ["\"MUSIC_VIDEO\"", "\"Spin-Off\"", "\"PARENT_STORY\""] {
            let parsed: AnimeRelationType = serde_json::from_str(tag).unwrap();
            assert_eq!(serde_json::to_string(&parsed).unwrap(), tag);
        }
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(AnimeRelationType::Sequel.to_string(), "SEQUEL");
        assert_eq!(AnimeRelationType::Character.display_name(), "Shared Character");
    }
}
