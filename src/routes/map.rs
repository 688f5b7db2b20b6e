use axum::{
    extract::{Query, State},
    response::Response,
};
use moodmeet_shared::{Mood, event::Event};
use serde::Serialize;

use crate::{error::ApiResult, template};

use super::{AppState, events::MoodQuery};

pub const CENTER: (f64, f64) = (12.97, 77.59);
const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Serialize, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub popup: String,
}

impl Marker {
    /// `None` for events without coordinates.
    pub fn from_event(event: &Event) -> Option<Self> {
        let (lat, lon) = (event.lat?, event.lon?);
        let category = event.category.as_deref().unwrap_or(DEFAULT_CATEGORY);

        Some(Self {
            lat,
            lon,
            radius: 6.0 + event.popularity as f64 * 0.5,
            popup: format!("{} ({category})", event.title),
        })
    }
}

pub struct MoodOption {
    pub value: String,
    pub label: String,
    pub selected: &'static str,
}

#[derive(askama::Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub markers: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub options: Vec<MoodOption>,
}

impl MapTemplate {
    pub fn new(events: &[Event], mood: Option<Mood>) -> Self {
        let markers: Vec<Marker> = events.iter().filter_map(Marker::from_event).collect();

        let mut options = vec![MoodOption {
            value: String::new(),
            label: "All moods".to_owned(),
            selected: if mood.is_none() { "selected" } else { "" },
        }];

        options.extend(Mood::ALL.into_iter().map(|m| MoodOption {
            value: m.to_string(),
            label: capitalize(m.as_ref()),
            selected: if Some(m) == mood { "selected" } else { "" },
        }));

        Self {
            markers: script_json(&markers),
            center_lat: CENTER.0,
            center_lon: CENTER.1,
            options,
        }
    }
}

/// JSON safe to embed inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "[]".to_owned())
        .replace('<', "\\u003c")
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<MoodQuery>,
) -> ApiResult<Response> {
    let mood = query.mood();
    let events = state.event_command.list(mood).await?;

    Ok(template::render(MapTemplate::new(&events, mood)))
}
