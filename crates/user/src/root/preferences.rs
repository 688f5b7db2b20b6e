use std::collections::{BTreeMap, BTreeSet};

use moodmeet_shared::preference::{PreferenceCategory, PreferencesRequest};

use crate::repository;

/// Category key under which flat event-category tags are stored.
pub const EVENT_CATEGORY_KEY: &str = "event";

impl super::Command {
    /// Replaces the stored preferences of a user with a fresh snapshot.
    #[tracing::instrument(skip_all, fields(user_id = input.user_id))]
    pub async fn save_preferences(&self, input: PreferencesRequest) -> moodmeet_shared::Result<()> {
        if !repository::exists(&self.0, input.user_id).await? {
            return Err(moodmeet_shared::Error::NotFound("User"));
        }

        let mut rows = BTreeSet::new();

        for (category, choices) in input.answers {
            for choice in choices {
                if !category.options().contains(&choice.as_str()) {
                    moodmeet_shared::bail!("Unknown {category} option: {choice}");
                }

                rows.insert((category.to_string(), choice));
            }
        }

        for tag in input.categories {
            let tag = tag.trim().to_lowercase();
            if tag.is_empty() {
                continue;
            }

            rows.insert((EVENT_CATEGORY_KEY.to_owned(), tag));
        }

        tracing::info!(count = rows.len(), "saving preferences");

        repository::replace_preferences(&self.0, input.user_id, rows.into_iter().collect()).await
    }

    pub async fn preferences(&self, user_id: i64) -> moodmeet_shared::Result<PreferencesRequest> {
        let mut answers: BTreeMap<PreferenceCategory, Vec<String>> = BTreeMap::new();
        let mut categories = Vec::new();

        for (category, choice) in repository::find_preferences(&self.0, user_id).await? {
            if category == EVENT_CATEGORY_KEY {
                categories.push(choice);
                continue;
            }

            match category.parse::<PreferenceCategory>() {
                Ok(category) => answers.entry(category).or_default().push(choice),
                Err(_) => tracing::warn!(%category, "ignoring unknown preference category"),
            }
        }

        Ok(PreferencesRequest {
            user_id,
            answers,
            categories,
        })
    }
}
