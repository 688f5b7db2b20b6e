use std::time::Duration;

use moodmeet_shared::{
    Mood,
    event::{
        Event, IcebreakerList, IcebreakerRequest, IcebreakerResponse, InterestedRequest,
        InterestedResponse,
    },
    preference::PreferencesRequest,
    user::{
        AuthResponse, LoginRequest, Profile, ProfileUpdate, RegisterRequest, StatusResponse,
        UploadResponse,
    },
};
use reqwest::{
    Response,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;

use crate::{Api, ClientError, Result};

/// [`Api`] over HTTP against a running MoodMeet server.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Decodes a success body, or turns an error body into [`ClientError::Rejected`].
async fn read<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();

    if status.is_success() {
        return Ok(res.json().await?);
    }

    let body = res.json::<serde_json::Value>().await.unwrap_or_default();

    match body.get("error").and_then(|e| e.as_str()) {
        Some(msg) => Err(ClientError::Rejected(msg.to_owned())),
        None => Err(ClientError::Transport(format!("unexpected status {status}"))),
    }
}

#[async_trait::async_trait]
impl Api for HttpApi {
    #[tracing::instrument(skip(self))]
    async fn events(&self, mood: Option<Mood>) -> Result<Vec<Event>> {
        let mut req = self.client.get(self.url("/api/events"));
        if let Some(mood) = mood {
            req = req.query(&[("mood", mood.as_ref())]);
        }

        read(req.send().await?).await
    }

    async fn mark_interested(&self, event_id: i64, user_id: i64) -> Result<InterestedResponse> {
        let res = self
            .client
            .post(self.url("/api/interested"))
            .json(&InterestedRequest { event_id, user_id })
            .send()
            .await?;

        read(res).await
    }

    async fn icebreaker(&self, interest: &str) -> Result<String> {
        let res = self
            .client
            .post(self.url("/api/icebreaker"))
            .json(&IcebreakerRequest {
                interest: Some(interest.to_owned()),
            })
            .send()
            .await?;

        Ok(read::<IcebreakerResponse>(res).await?.icebreaker)
    }

    async fn all_icebreakers(&self) -> Result<Vec<String>> {
        let res = self
            .client
            .get(self.url("/api/icebreakers/all"))
            .send()
            .await?;

        Ok(read::<IcebreakerList>(res).await?.icebreakers)
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let res = self
            .client
            .post(self.url("/api/login"))
            .json(request)
            .send()
            .await?;

        read(res).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let res = self
            .client
            .post(self.url("/api/register"))
            .json(request)
            .send()
            .await?;

        read(res).await
    }

    async fn save_preferences(&self, request: &PreferencesRequest) -> Result<StatusResponse> {
        let res = self
            .client
            .post(self.url("/api/preferences"))
            .json(request)
            .send()
            .await?;

        read(res).await
    }

    async fn profile(&self, user_id: i64) -> Result<Profile> {
        let res = self
            .client
            .get(self.url(&format!("/api/user/{user_id}")))
            .send()
            .await?;

        read(res).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<StatusResponse> {
        let res = self
            .client
            .patch(self.url("/api/user/update"))
            .json(update)
            .send()
            .await?;

        read(res).await
    }

    async fn upload_profile_image(
        &self,
        user_id: i64,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse> {
        let form = Form::new()
            .text("user_id", user_id.to_string())
            .part("profile_image", Part::bytes(bytes).file_name(file_name));

        let res = self
            .client
            .post(self.url("/api/profile/upload"))
            .multipart(form)
            .send()
            .await?;

        read(res).await
    }

    async fn user_events(&self, user_id: i64) -> Result<Vec<Event>> {
        let res = self
            .client
            .get(self.url(&format!("/api/user/{user_id}/events")))
            .send()
            .await?;

        read(res).await
    }
}
