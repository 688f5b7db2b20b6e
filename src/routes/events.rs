use axum::{
    Json,
    extract::{Query, State},
};
use moodmeet_shared::{
    Mood,
    event::{Event, InterestedRequest, InterestedResponse},
};
use serde::Deserialize;

use crate::error::{ApiJson, ApiResult};

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MoodQuery {
    #[serde(default)]
    pub mood: Option<String>,
}

impl MoodQuery {
    pub fn mood(&self) -> Option<Mood> {
        self.mood.as_deref().and_then(Mood::parse_filter)
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MoodQuery>,
) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.event_command.list(query.mood()).await?))
}

#[tracing::instrument(skip_all, fields(event_id = input.event_id, user_id = input.user_id))]
pub async fn interested(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<InterestedRequest>,
) -> ApiResult<Json<InterestedResponse>> {
    let already_interested = state
        .event_command
        .mark_interested(input.event_id, input.user_id)
        .await?;

    Ok(Json(InterestedResponse {
        ok: true,
        already_interested,
    }))
}
