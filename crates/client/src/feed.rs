use moodmeet_shared::{Mood, event::Event};

use crate::{Api, EventCard, Result};

/// Identifies one events request. Only the latest ticket may update the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedTicket {
    pub generation: u64,
    pub mood: Option<Mood>,
}

/// Events shown on the home page for the selected mood.
#[derive(Debug, Clone, Default)]
pub struct EventFeed {
    mood: Option<Mood>,
    generation: u64,
    cards: Vec<EventCard>,
}

impl EventFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn cards(&self) -> &[EventCard] {
        &self.cards
    }

    pub fn card_mut(&mut self, event_id: i64) -> Option<&mut EventCard> {
        self.cards.iter_mut().find(|c| c.event.id == event_id)
    }

    /// Switches the mood and returns the ticket of the fetch to issue.
    pub fn select_mood(&mut self, mood: Option<Mood>) -> FeedTicket {
        self.mood = mood;
        self.generation += 1;

        FeedTicket {
            generation: self.generation,
            mood,
        }
    }

    /// Replaces the list with the response of `ticket`.
    ///
    /// Returns `false` when a newer fetch has been issued since, or when the
    /// fetch failed; the current list is kept in both cases.
    pub fn apply(&mut self, ticket: FeedTicket, response: Result<Vec<Event>>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale events response"
            );
            return false;
        }

        match response {
            Ok(events) => {
                self.cards = events.into_iter().map(EventCard::new).collect();
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch events");
                false
            }
        }
    }

    /// Fetches the events of `mood` and applies the response.
    pub async fn load(&mut self, api: &dyn Api, mood: Option<Mood>) -> bool {
        let ticket = self.select_mood(mood);
        let response = api.events(ticket.mood).await;

        self.apply(ticket, response)
    }
}

/// Events the signed-in user has marked as interesting.
#[derive(Debug, Clone, Default)]
pub struct MyEvents {
    pub events: Vec<Event>,
}

impl MyEvents {
    pub async fn load(api: &dyn Api, user_id: i64) -> Result<Self> {
        let events = api.user_events(user_id).await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to fetch interested events");
        })?;

        Ok(Self { events })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ClientError,
        mock::{MockApi, event},
    };

    fn api() -> MockApi {
        let mut api = MockApi::default();
        api.events.insert(
            Some(Mood::Calm),
            vec![
                event(1, "Indie Art Night", "art", 0),
                event(2, "Lo-fi Coffee Meetup", "meetup", 3),
            ],
        );
        api.events.insert(
            Some(Mood::Energetic),
            vec![event(3, "Campus Coding Jam", "workshop", 1)],
        );
        api.events.insert(
            None,
            vec![
                event(1, "Indie Art Night", "art", 0),
                event(2, "Lo-fi Coffee Meetup", "meetup", 3),
                event(3, "Campus Coding Jam", "workshop", 1),
            ],
        );
        api
    }

    fn titles(feed: &EventFeed) -> Vec<&str> {
        feed.cards().iter().map(|c| c.event.title.as_str()).collect()
    }

    #[tokio::test]
    async fn mood_change_replaces_list() {
        let api = api();
        let mut feed = EventFeed::new();

        assert!(feed.load(&api, Some(Mood::Calm)).await);
        assert_eq!(titles(&feed), vec!["Indie Art Night", "Lo-fi Coffee Meetup"]);

        assert!(feed.load(&api, Some(Mood::Energetic)).await);
        assert_eq!(titles(&feed), vec!["Campus Coding Jam"]);
        assert_eq!(feed.mood(), Some(Mood::Energetic));
        assert_eq!(api.calls(), vec!["events:calm", "events:energetic"]);
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let api = api();
        let mut feed = EventFeed::new();

        let calm = feed.select_mood(Some(Mood::Calm));
        let energetic = feed.select_mood(Some(Mood::Energetic));

        let energetic_events = api.events(energetic.mood).await;
        let calm_events = api.events(calm.mood).await;

        assert!(feed.apply(energetic, energetic_events));
        assert!(!feed.apply(calm, calm_events));
        assert_eq!(titles(&feed), vec!["Campus Coding Jam"]);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_list() {
        let api = api();
        let mut feed = EventFeed::new();
        feed.load(&api, Some(Mood::Calm)).await;

        let ticket = feed.select_mood(Some(Mood::Energetic));
        let applied = feed.apply(
            ticket,
            Err(ClientError::Transport("connection refused".to_owned())),
        );

        assert!(!applied);
        assert_eq!(titles(&feed), vec!["Indie Art Night", "Lo-fi Coffee Meetup"]);
    }

    #[tokio::test]
    async fn my_events_lists_interested_events() {
        let api = api();
        let mut feed = EventFeed::new();
        feed.load(&api, None).await;

        feed.card_mut(3).unwrap().mark_interested(&api, 5).await.unwrap();
        feed.card_mut(1).unwrap().mark_interested(&api, 5).await.unwrap();

        let mine = MyEvents::load(&api, 5).await.unwrap();
        let ids = mine.events.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(feed.card_mut(3).unwrap().interested_count(), 2);
    }
}
