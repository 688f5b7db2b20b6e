use crate::repository;

/// Action recorded in the user event log on a first interest.
pub const CLICKED_INTERESTED: &str = "clicked_interested";

impl super::Command {
    /// Records that `user_id` is interested in `event_id`.
    ///
    /// Returns `true` when the interest was already recorded, in which case
    /// neither popularity nor the event log change.
    #[tracing::instrument(skip(self))]
    pub async fn mark_interested(
        &self,
        event_id: i64,
        user_id: i64,
    ) -> moodmeet_shared::Result<bool> {
        let mut tx = self.0.begin().await?;

        if !repository::event_exists(&mut tx, event_id).await? {
            return Err(moodmeet_shared::Error::NotFound("Event"));
        }

        if !repository::user_exists(&mut tx, user_id).await? {
            return Err(moodmeet_shared::Error::NotFound("User"));
        }

        if !repository::create_interested(&mut tx, event_id, user_id).await? {
            tracing::debug!("interest already recorded");

            return Ok(true);
        }

        repository::increment_popularity(&mut tx, event_id).await?;
        repository::create_log(&mut tx, user_id, event_id, CLICKED_INTERESTED).await?;

        tx.commit().await?;

        Ok(false)
    }
}
