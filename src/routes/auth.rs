use axum::{Json, extract::State};
use moodmeet_shared::user::{AuthResponse, LoginRequest, RegisterRequest};
use moodmeet_user::{LoginInput, RegisterInput};

use crate::error::{ApiJson, ApiResult};

use super::AppState;

#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user_id = state
        .user_command
        .register(RegisterInput {
            email: input.email,
            password: input.password,
            name: input.name,
        })
        .await?;

    Ok(Json(AuthResponse::success(user_id)))
}

#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user_id = state
        .user_command
        .login(LoginInput {
            email: input.email,
            password: input.password,
        })
        .await?;

    tracing::info!(user_id, "user logged in");

    Ok(Json(AuthResponse::success(user_id)))
}
