use moodmeet_shared::user::{Profile, ProfileUpdate};

use crate::repository;

impl super::Command {
    pub async fn profile(&self, id: i64) -> moodmeet_shared::Result<Option<Profile>> {
        Ok(repository::find_profile(&self.0, id)
            .await?
            .map(Profile::from))
    }

    #[tracing::instrument(skip_all, fields(user_id = input.user_id))]
    pub async fn update_profile(&self, input: ProfileUpdate) -> moodmeet_shared::Result<()> {
        if !repository::exists(&self.0, input.user_id).await? {
            return Err(moodmeet_shared::Error::NotFound("User"));
        }

        if !repository::update(&self.0, input).await? {
            tracing::debug!("profile update without fields");
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_profile_image(&self, id: i64, path: String) -> moodmeet_shared::Result<()> {
        if !repository::exists(&self.0, id).await? {
            return Err(moodmeet_shared::Error::NotFound("User"));
        }

        repository::set_profile_image(&self.0, id, path).await
    }

    pub async fn exists(&self, id: i64) -> moodmeet_shared::Result<bool> {
        repository::exists(&self.0, id).await
    }
}
