use moodmeet_shared::user::{ApiStatus, Profile, ProfileUpdate};

use crate::{Api, ClientError, Result};

/// Source of the device position.
#[async_trait::async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<(f64, f64)>;
}

/// Profile page state. Edits stay local until [`ProfileEditor::update`].
#[derive(Debug, Clone, Default)]
pub struct ProfileEditor {
    user_id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub gender: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    profile_image: Option<String>,
    profile: Profile,
}

impl ProfileEditor {
    /// Loads the stored profile, then asks for the current position.
    ///
    /// A geolocation failure keeps the stored coordinates.
    pub async fn load(api: &dyn Api, geolocator: &dyn Geolocator, user_id: i64) -> Result<Self> {
        let mut editor = Self {
            user_id,
            ..Default::default()
        };
        editor.fill(api.profile(user_id).await?);

        match geolocator.current_position().await {
            Ok((lat, lon)) => {
                editor.lat = Some(lat);
                editor.lon = Some(lon);
            }
            Err(err) => tracing::info!(error = %err, "location unavailable"),
        }

        Ok(editor)
    }

    fn fill(&mut self, profile: Profile) {
        self.name = profile.name.clone().unwrap_or_default();
        self.age = profile.age;
        self.gender = profile.gender.clone().unwrap_or_default();
        self.lat = profile.lat;
        self.lon = profile.lon;
        self.profile_image = profile.profile_image.clone();
        self.profile = profile;
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    /// Every editor field is sent. Blank text and `None` clear the stored value.
    fn changes(&self) -> ProfileUpdate {
        let text = |value: &str| Some(value.trim().to_owned()).filter(|v| !v.is_empty());

        ProfileUpdate {
            user_id: self.user_id,
            name: Some(text(&self.name)),
            age: Some(self.age),
            gender: Some(text(&self.gender)),
            lat: Some(self.lat),
            lon: Some(self.lon),
            ..Default::default()
        }
    }

    /// Sends name, age, gender and coordinates in one request, then reloads.
    #[tracing::instrument(skip_all, fields(user_id = self.user_id))]
    pub async fn update(&mut self, api: &dyn Api) -> Result<()> {
        let res = api.update_profile(&self.changes()).await?;

        if res.status == ApiStatus::Error {
            return Err(ClientError::Rejected(
                res.error.unwrap_or_else(|| "Profile update failed".to_owned()),
            ));
        }

        let profile = api.profile(self.user_id).await?;
        self.fill(profile);

        Ok(())
    }

    /// Uploads a new picture. Only the displayed image changes.
    pub async fn upload_image(
        &mut self,
        api: &dyn Api,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let res = api
            .upload_profile_image(self.user_id, file_name.into(), bytes)
            .await?;

        match (res.status, res.profile_image) {
            (ApiStatus::Success, Some(path)) => {
                self.profile_image = Some(path);
                Ok(())
            }
            (_, _) => Err(ClientError::Rejected(
                res.error.unwrap_or_else(|| "Upload failed".to_owned()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockApi;

    struct FixedPosition(Option<(f64, f64)>);

    #[async_trait::async_trait]
    impl Geolocator for FixedPosition {
        async fn current_position(&self) -> Result<(f64, f64)> {
            self.0
                .ok_or_else(|| ClientError::Transport("Location denied".to_owned()))
        }
    }

    fn api() -> MockApi {
        let api = MockApi::default();
        *api.profile.lock().unwrap() = Profile {
            id: 3,
            email: "jane@moodmeet.localhost".to_owned(),
            name: Some("Jane".to_owned()),
            lat: Some(1.0),
            lon: Some(2.0),
            ..Default::default()
        };
        api
    }

    #[tokio::test]
    async fn geolocation_overrides_stored_coordinates() {
        let api = api();

        let editor = ProfileEditor::load(&api, &FixedPosition(Some((12.9, 77.6))), 3)
            .await
            .unwrap();
        assert_eq!((editor.lat, editor.lon), (Some(12.9), Some(77.6)));

        let editor = ProfileEditor::load(&api, &FixedPosition(None), 3)
            .await
            .unwrap();
        assert_eq!((editor.lat, editor.lon), (Some(1.0), Some(2.0)));
        assert_eq!(editor.name, "Jane");
    }

    #[tokio::test]
    async fn update_sends_fields_then_reloads() {
        let api = api();
        let mut editor = ProfileEditor::load(&api, &FixedPosition(Some((12.9, 77.6))), 3)
            .await
            .unwrap();

        editor.age = Some(31);
        editor.gender = "Female".to_owned();
        editor.update(&api).await.unwrap();

        let sent = api.updates.lock().unwrap().remove(0);
        assert_eq!(sent.user_id, 3);
        assert_eq!(sent.name, Some(Some("Jane".to_owned())));
        assert_eq!(sent.age, Some(Some(31)));
        assert_eq!(sent.gender, Some(Some("Female".to_owned())));
        assert_eq!((sent.lat, sent.lon), (Some(Some(12.9)), Some(Some(77.6))));
        assert_eq!(sent.bio, None);

        assert_eq!(editor.profile().age, Some(31));
        assert_eq!(api.calls(), vec!["profile:3", "update:3", "profile:3"]);
    }

    #[tokio::test]
    async fn cleared_fields_are_sent_as_null() {
        let api = api();
        {
            let mut profile = api.profile.lock().unwrap();
            profile.gender = Some("Female".to_owned());
            profile.age = Some(30);
        }
        let mut editor = ProfileEditor::load(&api, &FixedPosition(None), 3)
            .await
            .unwrap();

        editor.gender = "  ".to_owned();
        editor.age = None;
        editor.update(&api).await.unwrap();

        let sent = api.updates.lock().unwrap().remove(0);
        assert_eq!(sent.gender, Some(None));
        assert_eq!(sent.age, Some(None));
        assert_eq!(
            serde_json::to_value(&sent).unwrap()["gender"],
            serde_json::Value::Null
        );

        assert_eq!(editor.gender, "");
        assert_eq!(editor.age, None);
        assert_eq!(editor.profile().gender, None);
    }

    #[tokio::test]
    async fn upload_changes_only_image() {
        let api = api();
        let mut editor = ProfileEditor::load(&api, &FixedPosition(None), 3)
            .await
            .unwrap();
        editor.name = "Janet".to_owned();

        editor
            .upload_image(&api, "me.png", vec![1, 2, 3])
            .await
            .unwrap();

        assert_eq!(editor.profile_image(), Some("uploads/3_me.png"));
        assert_eq!(editor.name, "Janet");
        assert_eq!(editor.profile().name.as_deref(), Some("Jane"));
    }
}
