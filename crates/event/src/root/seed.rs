use crate::repository::{self, NewEvent};

const SAMPLE_EVENTS: [(&str, f64, f64, &str); 5] = [
    ("Indie Art Night", 12.9716, 77.5946, "art"),
    ("Lo-fi Coffee Meetup", 12.9352, 77.6245, "meetup"),
    ("Campus Coding Jam", 12.9722, 77.5937, "workshop"),
    ("Open Mic - Chill Vibes", 12.9718, 77.6412, "music"),
    ("Anime & Chill", 13.0358, 77.5970, "anime"),
];

const SAMPLE_ICEBREAKERS: [(&str, &str); 5] = [
    ("What's the best event you've been to this year?", "general"),
    ("Which song is stuck in your head right now?", "music"),
    ("If you could learn any craft in a weekend, what would it be?", "workshop"),
    ("What's an artwork that stayed with you?", "art"),
    ("Which anime would you recommend to a first-timer?", "anime"),
];

impl super::Command {
    /// Inserts the sample events and icebreakers into empty tables.
    #[tracing::instrument(skip(self))]
    pub async fn seed_samples(&self) -> moodmeet_shared::Result<()> {
        let mut tx = self.0.begin().await?;

        if repository::count(&mut tx).await? == 0 {
            let events = SAMPLE_EVENTS
                .iter()
                .map(|(title, lat, lon, category)| NewEvent {
                    title: (*title).to_owned(),
                    description: None,
                    location_name: None,
                    event_time: None,
                    lat: *lat,
                    lon: *lon,
                    category: (*category).to_owned(),
                })
                .collect();

            repository::create_events(&mut tx, events).await?;
            tracing::info!(count = SAMPLE_EVENTS.len(), "seeded sample events");
        }

        if repository::count_icebreakers(&mut tx).await? == 0 {
            repository::create_icebreakers(&mut tx, &SAMPLE_ICEBREAKERS).await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
