//! Data model for the OneBot action surface.

use serde::{Deserialize, Serialize};

/// Group honor category.
///
/// These are the achievement/ranking categories the chat client exposes
/// for a group. The wire values are the lowercase snake_case strings used
/// by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HonorType {
    /// All categories at once.
    All,
    /// Most talkative members.
    Talkative,
    /// Best performers.
    Performer,
    /// Group legends.
    Legend,
    /// Strong newcomers.
    StrongNewbie,
    /// Emotion masters.
    Emotion,
}

impl HonorType {
    /// All accepted wire values, used as the schema enum set.
    pub const VALUES: &'static [&'static str] = &[
        "all",
        "talkative",
        "performer",
        "legend",
        "strong_newbie",
        "emotion",
    ];

    /// Returns the wire value for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Talkative => "talkative",
            Self::Performer => "performer",
            Self::Legend => "legend",
            Self::StrongNewbie => "strong_newbie",
            Self::Emotion => "emotion",
        }
    }

    /// Parses a wire value into a category.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "talkative" => Some(Self::Talkative),
            "performer" => Some(Self::Performer),
            "legend" => Some(Self::Legend),
            "strong_newbie" => Some(Self::StrongNewbie),
            "emotion" => Some(Self::Emotion),
            _ => None,
        }
    }
}

impl std::fmt::Display for HonorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One favorite-emoji record returned by the chat client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEmoji {
    /// Download URL of the custom face image.
    pub url: String,
    /// Opaque identifier, when the client supplies one.
    #[serde(default)]
    pub emoji_id: Option<String>,
}
