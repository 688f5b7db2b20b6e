use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    routing::{get, patch, post},
};
use moodmeet_event::icebreaker::IcebreakerGenerator;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

mod auth;
mod events;
mod health;
mod icebreaker;
mod map;
mod preferences;
mod quiz;
mod user;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_command: moodmeet_user::Command,
    pub event_command: moodmeet_event::Command,
    pub icebreaker: Arc<dyn IcebreakerGenerator>,
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        icebreaker: Arc<dyn IcebreakerGenerator>,
        uploads_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            user_command: moodmeet_user::Command(pool.clone()),
            event_command: moodmeet_event::Command(pool.clone()),
            pool,
            icebreaker,
            uploads_dir: uploads_dir.into(),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    let uploads = ServeDir::new(&app_state.uploads_dir);

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/user/update", patch(user::update))
        .route("/api/user/{user_id}", get(user::profile))
        .route("/api/user/{user_id}/events", get(user::events))
        .route("/api/profile/upload", post(user::upload))
        .route("/api/preferences", post(preferences::save))
        .route("/api/events", get(events::list))
        .route("/api/interested", post(events::interested))
        .route("/api/icebreaker", post(icebreaker::generate))
        .route("/api/icebreakers/all", get(icebreaker::all))
        .route("/api/quiz/questions", get(quiz::questions))
        .route("/api/quiz/answer", post(quiz::answer))
        .route("/api/quiz/done", post(quiz::done))
        .route("/map", get(map::page))
        .nest_service("/uploads", uploads)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
