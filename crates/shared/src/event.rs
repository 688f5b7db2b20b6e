use serde::{Deserialize, Serialize};

/// Event categories known to the importer and the flat preference picker.
pub const EVENT_CATEGORIES: [&str; 9] = [
    "art", "meetup", "workshop", "music", "anime", "sports", "date", "comedy", "general",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "location")]
    pub location_name: Option<String>,
    #[serde(default, alias = "time")]
    pub event_time: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "peopleInterested")]
    pub popularity: i64,
    #[serde(
        default,
        alias = "matchPercentage",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_percentage: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestedRequest {
    pub event_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestedResponse {
    pub ok: bool,
    #[serde(default)]
    pub already_interested: bool,
}

pub const DEFAULT_INTEREST: &str = "something cool";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcebreakerRequest {
    #[serde(default)]
    pub interest: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcebreakerResponse {
    pub icebreaker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcebreakerList {
    pub icebreakers: Vec<String>,
}
