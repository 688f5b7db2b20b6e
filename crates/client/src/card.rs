use moodmeet_shared::event::{DEFAULT_INTEREST, Event};

use crate::{Api, ClientError, Result};

/// Conversation starters shown after marking interest in an event.
#[derive(Debug, Clone, PartialEq)]
pub struct IcebreakerModal {
    pub event_title: String,
    pub text: String,
    pub starters: Vec<String>,
}

impl IcebreakerModal {
    pub fn new(event_title: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();

        Self {
            event_title: event_title.into(),
            starters: parse_starters(&text),
            text,
        }
    }

    pub fn title(&self) -> &'static str {
        "AI Conversation Starters"
    }

    pub fn subtitle(&self) -> String {
        format!("Perfect for breaking the ice at \"{}\"", self.event_title)
    }
}

/// One starter per non-empty line, leading list markers removed.
pub fn parse_starters(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = line.trim();
            let unnumbered = line.trim_start_matches(|c: char| c.is_ascii_digit());
            let line = match unnumbered.strip_prefix([')', '.']) {
                Some(rest) if unnumbered.len() < line.len() => rest,
                _ => line.trim_start_matches(['-', '*', '•']),
            };

            line.trim().to_owned()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Display state of one event in a feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub event: Event,
    interested_count: i64,
    already_interested: bool,
    icebreaker: Option<IcebreakerModal>,
}

impl EventCard {
    pub fn new(event: Event) -> Self {
        Self {
            interested_count: event.popularity,
            event,
            already_interested: false,
            icebreaker: None,
        }
    }

    pub fn interested_count(&self) -> i64 {
        self.interested_count
    }

    pub fn is_already_interested(&self) -> bool {
        self.already_interested
    }

    pub fn time_label(&self) -> &str {
        self.event
            .event_time
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("TBA")
    }

    pub fn location_label(&self) -> &str {
        self.event
            .location_name
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("Nearby")
    }

    pub fn description(&self) -> &str {
        self.event
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description available")
    }

    pub fn match_label(&self) -> Option<String> {
        self.event.match_percentage.map(|m| format!("{m}% match"))
    }

    /// Topic passed to the icebreaker endpoint.
    pub fn interest(&self) -> &str {
        self.event
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_INTEREST)
    }

    pub fn icebreaker(&self) -> Option<&IcebreakerModal> {
        self.icebreaker.as_ref()
    }

    pub fn close_icebreaker(&mut self) {
        self.icebreaker = None;
    }

    /// Registers interest and bumps the displayed count once.
    ///
    /// Refused locally when the user already is interested. When the server
    /// reports an earlier registration the count is left as is.
    #[tracing::instrument(skip(self, api), fields(event_id = self.event.id))]
    pub async fn register_interest(&mut self, api: &dyn Api, user_id: i64) -> Result<()> {
        if self.already_interested {
            return Err(ClientError::AlreadyInterested);
        }

        let res = match api.mark_interested(self.event.id, user_id).await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = %err, "failed to mark interest");
                return Err(err);
            }
        };

        self.already_interested = true;

        if res.already_interested {
            return Err(ClientError::AlreadyInterested);
        }

        self.interested_count += 1;

        Ok(())
    }

    pub async fn load_icebreaker(&mut self, api: &dyn Api) -> Result<()> {
        let result = api.icebreaker(self.interest()).await;

        match result {
            Ok(text) => {
                self.icebreaker = Some(IcebreakerModal::new(&self.event.title, text));
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch icebreaker");
                Err(err)
            }
        }
    }

    /// Marks interest then opens the icebreaker modal.
    pub async fn mark_interested(&mut self, api: &dyn Api, user_id: i64) -> Result<()> {
        self.register_interest(api, user_id).await?;
        self.load_icebreaker(api).await
    }
}
