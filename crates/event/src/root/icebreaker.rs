use crate::repository;

impl super::Command {
    /// Every stored icebreaker question.
    pub async fn all_icebreakers(&self) -> moodmeet_shared::Result<Vec<String>> {
        repository::find_icebreakers(&self.0).await
    }
}
