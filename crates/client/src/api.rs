use moodmeet_shared::{
    Mood,
    event::{Event, InterestedResponse},
    preference::PreferencesRequest,
    user::{
        AuthResponse, LoginRequest, Profile, ProfileUpdate, RegisterRequest, StatusResponse,
        UploadResponse,
    },
};

use crate::Result;

/// Backend calls made by the client. One call per method, no retry or caching.
#[async_trait::async_trait]
pub trait Api: Send + Sync {
    async fn events(&self, mood: Option<Mood>) -> Result<Vec<Event>>;

    async fn mark_interested(&self, event_id: i64, user_id: i64) -> Result<InterestedResponse>;

    async fn icebreaker(&self, interest: &str) -> Result<String>;

    async fn all_icebreakers(&self) -> Result<Vec<String>>;

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;

    async fn save_preferences(&self, request: &PreferencesRequest) -> Result<StatusResponse>;

    async fn profile(&self, user_id: i64) -> Result<Profile>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<StatusResponse>;

    async fn upload_profile_image(
        &self,
        user_id: i64,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse>;

    async fn user_events(&self, user_id: i64) -> Result<Vec<Event>>;
}
