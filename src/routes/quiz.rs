use axum::{Json, extract::State};
use moodmeet_shared::{
    quiz::{QuizAnswerRequest, QuizQuestion, questions as quiz_questions},
    user::StatusResponse,
};
use moodmeet_user::QuizAnswerInput;
use serde_json::{Value, json};

use crate::error::{ApiJson, ApiResult};

use super::AppState;

pub async fn questions() -> Json<Vec<QuizQuestion>> {
    Json(quiz_questions())
}

pub async fn answer(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<QuizAnswerRequest>,
) -> ApiResult<Json<StatusResponse>> {
    state
        .user_command
        .answer_quiz(QuizAnswerInput {
            user_id: input.user_id,
            question: input.question,
            answer: input.answer,
        })
        .await?;

    Ok(Json(StatusResponse::success()))
}

pub async fn done() -> Json<Value> {
    Json(json!({"status": "finished"}))
}
