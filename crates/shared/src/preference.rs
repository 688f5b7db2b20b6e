use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PreferenceCategory {
    Music,
    Movies,
    Books,
    Food,
}

impl PreferenceCategory {
    pub const ALL: [PreferenceCategory; 4] = [
        PreferenceCategory::Music,
        PreferenceCategory::Movies,
        PreferenceCategory::Books,
        PreferenceCategory::Food,
    ];

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            PreferenceCategory::Music => {
                &["Pop", "Rock", "Hip-Hop", "Jazz", "Classical", "Indie", "EDM"]
            }
            PreferenceCategory::Movies => {
                &["Action", "Romance", "Sci-Fi", "Comedy", "Drama", "Horror"]
            }
            PreferenceCategory::Books => &[
                "Fiction",
                "Non-Fiction",
                "Fantasy",
                "Mystery",
                "Poetry",
                "Philosophy",
            ],
            PreferenceCategory::Food => &[
                "Italian",
                "Indian",
                "Mexican",
                "Japanese",
                "Chinese",
                "Mediterranean",
            ],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PreferenceCategory::Music => "Pick Your Favorite Music Genres",
            PreferenceCategory::Movies => "Pick Your Favorite Movie Genres",
            PreferenceCategory::Books => "Pick Your Favorite Book Types",
            PreferenceCategory::Food => "Pick Your Favorite Cuisines",
        }
    }

    /// Category shown after this one, `None` once the last step is reached.
    pub fn next(&self) -> Option<PreferenceCategory> {
        match self {
            PreferenceCategory::Music => Some(PreferenceCategory::Movies),
            PreferenceCategory::Movies => Some(PreferenceCategory::Books),
            PreferenceCategory::Books => Some(PreferenceCategory::Food),
            PreferenceCategory::Food => None,
        }
    }
}

/// Body of `POST /api/preferences`.
///
/// The stepwise wizard fills `answers`, the flat picker fills `categories`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesRequest {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub answers: BTreeMap<PreferenceCategory, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}
