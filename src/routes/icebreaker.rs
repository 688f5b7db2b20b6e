use axum::{Json, extract::State};
use moodmeet_shared::event::{
    DEFAULT_INTEREST, IcebreakerList, IcebreakerRequest, IcebreakerResponse,
};

use crate::error::{ApiJson, ApiResult};

use super::AppState;

pub async fn generate(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<IcebreakerRequest>,
) -> Json<IcebreakerResponse> {
    let interest = input
        .interest
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_INTEREST);

    Json(IcebreakerResponse {
        icebreaker: state.icebreaker.generate(interest).await,
    })
}

pub async fn all(State(state): State<AppState>) -> ApiResult<Json<IcebreakerList>> {
    Ok(Json(IcebreakerList {
        icebreakers: state.event_command.all_icebreakers().await?,
    }))
}
