use axum::{Json, extract::State};
use moodmeet_shared::{preference::PreferencesRequest, user::StatusResponse};

use crate::error::{ApiJson, ApiResult};

use super::AppState;

pub async fn save(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<PreferencesRequest>,
) -> ApiResult<Json<StatusResponse>> {
    state.user_command.save_preferences(input).await?;

    Ok(Json(StatusResponse::success()))
}
