use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use moodmeet_shared::{
    Mood,
    event::{Event, InterestedResponse},
    preference::PreferencesRequest,
    user::{
        ApiStatus, AuthResponse, LoginRequest, Profile, ProfileUpdate, RegisterRequest,
        StatusResponse, UploadResponse,
    },
};

use crate::{Api, ClientError, Result};

/// In-memory backend recording every call it receives.
#[derive(Default)]
pub struct MockApi {
    pub events: HashMap<Option<Mood>, Vec<Event>>,
    pub user_id: i64,
    pub reject_auth: Option<String>,
    pub offline: bool,
    pub calls: Mutex<Vec<String>>,
    pub interested: Mutex<HashSet<(i64, i64)>>,
    pub preferences: Mutex<Vec<PreferencesRequest>>,
    pub profile: Mutex<Profile>,
    pub updates: Mutex<Vec<ProfileUpdate>>,
}

pub fn event(id: i64, title: &str, category: &str, popularity: i64) -> Event {
    Event {
        id,
        title: title.to_owned(),
        description: None,
        location_name: None,
        event_time: None,
        lat: None,
        lon: None,
        category: Some(category.to_owned()),
        popularity,
        match_percentage: None,
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<()> {
        self.calls.lock().unwrap().push(call.into());

        if self.offline {
            return Err(ClientError::Transport("connection refused".to_owned()));
        }

        Ok(())
    }

    fn auth(&self) -> AuthResponse {
        match &self.reject_auth {
            Some(error) => AuthResponse {
                status: ApiStatus::Error,
                user_id: None,
                error: Some(error.to_owned()),
            },
            None => AuthResponse::success(self.user_id),
        }
    }
}

#[async_trait::async_trait]
impl Api for MockApi {
    async fn events(&self, mood: Option<Mood>) -> Result<Vec<Event>> {
        self.record(format!("events:{}", mood.map(|m| m.to_string()).unwrap_or_default()))?;

        Ok(self.events.get(&mood).cloned().unwrap_or_default())
    }

    async fn mark_interested(&self, event_id: i64, user_id: i64) -> Result<InterestedResponse> {
        self.record(format!("interested:{event_id}:{user_id}"))?;
        let inserted = self.interested.lock().unwrap().insert((event_id, user_id));

        Ok(InterestedResponse {
            ok: true,
            already_interested: !inserted,
        })
    }

    async fn icebreaker(&self, interest: &str) -> Result<String> {
        self.record(format!("icebreaker:{interest}"))?;

        Ok(format!("1) Favorite {interest}?\n2) Last {interest} you loved?"))
    }

    async fn all_icebreakers(&self) -> Result<Vec<String>> {
        self.record("icebreakers")?;

        Ok(vec![])
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.record(format!("login:{}", request.email))?;

        Ok(self.auth())
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.record(format!("register:{}", request.email))?;

        Ok(self.auth())
    }

    async fn save_preferences(&self, request: &PreferencesRequest) -> Result<StatusResponse> {
        self.record(format!("preferences:{}", request.user_id))?;
        self.preferences.lock().unwrap().push(request.clone());

        Ok(StatusResponse::success())
    }

    async fn profile(&self, user_id: i64) -> Result<Profile> {
        self.record(format!("profile:{user_id}"))?;

        Ok(self.profile.lock().unwrap().clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<StatusResponse> {
        self.record(format!("update:{}", update.user_id))?;
        self.updates.lock().unwrap().push(update.clone());

        let mut profile = self.profile.lock().unwrap();
        if let Some(name) = &update.name {
            profile.name = name.clone();
        }
        if let Some(age) = update.age {
            profile.age = age;
        }
        if let Some(gender) = &update.gender {
            profile.gender = gender.clone();
        }
        if let Some(lat) = update.lat {
            profile.lat = lat;
        }
        if let Some(lon) = update.lon {
            profile.lon = lon;
        }

        Ok(StatusResponse::success())
    }

    async fn upload_profile_image(
        &self,
        user_id: i64,
        file_name: String,
        _bytes: Vec<u8>,
    ) -> Result<UploadResponse> {
        self.record(format!("upload:{user_id}"))?;

        Ok(UploadResponse {
            status: ApiStatus::Success,
            profile_image: Some(format!("uploads/{user_id}_{file_name}")),
            error: None,
        })
    }

    async fn user_events(&self, user_id: i64) -> Result<Vec<Event>> {
        self.record(format!("user_events:{user_id}"))?;

        let interested = self.interested.lock().unwrap();
        let mut events = self
            .events
            .get(&None)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|e| interested.contains(&(e.id, user_id)))
            .collect::<Vec<_>>();
        events.sort_by_key(|e| e.id);

        Ok(events)
    }
}
