use std::collections::{BTreeMap, BTreeSet};

use moodmeet_shared::{
    event::EVENT_CATEGORIES,
    preference::{PreferenceCategory, PreferencesRequest},
    user::ApiStatus,
};

use crate::{Api, ClientError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Category(PreferenceCategory),
    Done,
}

/// Stepwise preference wizard: music, movies, books, food, then done.
#[derive(Debug, Clone)]
pub struct PreferenceFlow {
    step: Step,
    selections: BTreeMap<PreferenceCategory, BTreeSet<&'static str>>,
}

impl Default for PreferenceFlow {
    fn default() -> Self {
        Self {
            step: Step::Category(PreferenceCategory::Music),
            selections: BTreeMap::new(),
        }
    }
}

impl PreferenceFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step == Step::Done
    }

    /// Options offered at the current step, empty once done.
    pub fn options(&self) -> &'static [&'static str] {
        match self.step {
            Step::Category(category) => category.options(),
            Step::Done => &[],
        }
    }

    pub fn is_selected(&self, option: &str) -> bool {
        let Step::Category(category) = self.step else {
            return false;
        };

        self.selections
            .get(&category)
            .is_some_and(|s| s.contains(option))
    }

    /// Flips `option` in the current step. Unknown options are ignored.
    pub fn toggle(&mut self, option: &str) {
        let Step::Category(category) = self.step else {
            return;
        };

        let Some(option) = category.options().iter().copied().find(|o| *o == option) else {
            tracing::debug!(%category, option, "ignoring unknown option");
            return;
        };

        let selected = self.selections.entry(category).or_default();
        if !selected.remove(&option) {
            selected.insert(option);
        }
    }

    pub fn next(&mut self) {
        if let Step::Category(category) = self.step {
            self.step = category.next().map(Step::Category).unwrap_or(Step::Done);
        }
    }

    /// Every selection made so far, in catalog order.
    pub fn request(&self, user_id: i64) -> PreferencesRequest {
        let answers = self
            .selections
            .iter()
            .filter(|(_, selected)| !selected.is_empty())
            .map(|(category, selected)| {
                let choices = category
                    .options()
                    .iter()
                    .filter(|o| selected.contains(*o))
                    .map(|o| (*o).to_owned())
                    .collect();

                (*category, choices)
            })
            .collect();

        PreferencesRequest {
            user_id,
            answers,
            categories: vec![],
        }
    }

    /// Sends all selections in one request. Only allowed once done.
    pub async fn submit(&self, api: &dyn Api, user_id: i64) -> Result<()> {
        if !self.is_done() {
            return Err(ClientError::Validation(
                "Finish every step before submitting".to_owned(),
            ));
        }

        send(api, &self.request(user_id)).await
    }
}

/// Single-step picker of event category tags.
#[derive(Debug, Clone, Default)]
pub struct CategoryPicker {
    selected: BTreeSet<&'static str>,
}

impl CategoryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [&'static str] {
        &EVENT_CATEGORIES
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.contains(tag)
    }

    pub fn toggle(&mut self, tag: &str) {
        let Some(tag) = EVENT_CATEGORIES.iter().copied().find(|c| *c == tag) else {
            return;
        };

        if !self.selected.remove(&tag) {
            self.selected.insert(tag);
        }
    }

    pub fn request(&self, user_id: i64) -> PreferencesRequest {
        PreferencesRequest {
            user_id,
            answers: BTreeMap::new(),
            categories: EVENT_CATEGORIES
                .iter()
                .filter(|c| self.selected.contains(*c))
                .map(|c| (*c).to_owned())
                .collect(),
        }
    }

    pub async fn submit(&self, api: &dyn Api, user_id: i64) -> Result<()> {
        send(api, &self.request(user_id)).await
    }
}

async fn send(api: &dyn Api, request: &PreferencesRequest) -> Result<()> {
    save(api, request).await.inspect_err(|err| {
        tracing::error!(user_id = request.user_id, error = %err, "failed to save preferences");
    })
}

async fn save(api: &dyn Api, request: &PreferencesRequest) -> Result<()> {
    let res = api.save_preferences(request).await?;

    if res.status == ApiStatus::Error {
        return Err(ClientError::Rejected(
            res.error.unwrap_or_else(|| "Could not save preferences".to_owned()),
        ));
    }

    tracing::info!(user_id = request.user_id, "preferences saved");

    Ok(())
}
