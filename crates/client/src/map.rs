use moodmeet_shared::Mood;

/// Map page: a mood filter and the URL of the embedded server map.
#[derive(Debug, Clone)]
pub struct MapPage {
    base_url: String,
    pub mood: Option<Mood>,
}

impl MapPage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            mood: None,
        }
    }

    pub fn select_mood(&mut self, mood: Option<Mood>) {
        self.mood = mood;
    }

    pub fn url(&self) -> String {
        match self.mood {
            Some(mood) => format!(
                "{}/map?mood={}",
                self.base_url,
                urlencoding::encode(mood.as_ref())
            ),
            None => format!("{}/map", self.base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_selected_mood() {
        let mut page = MapPage::new("http://localhost:5000/");
        assert_eq!(page.url(), "http://localhost:5000/map");

        page.select_mood(Some(Mood::Anxious));
        assert_eq!(page.url(), "http://localhost:5000/map?mood=anxious");

        page.select_mood(None);
        assert_eq!(page.url(), "http://localhost:5000/map");
    }
}
