use moodmeet_shared::{Mood, event::Event};

use crate::repository;

impl super::Command {
    /// Events whose category belongs to `mood`, or every event without a mood.
    pub async fn list(&self, mood: Option<Mood>) -> moodmeet_shared::Result<Vec<Event>> {
        let categories = mood.map(|m| m.categories());
        let rows = repository::list(&self.0, categories).await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    pub async fn interested_events(&self, user_id: i64) -> moodmeet_shared::Result<Vec<Event>> {
        let rows = repository::list_by_interested_user(&self.0, user_id).await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}
