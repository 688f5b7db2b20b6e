use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Filter tag used to narrow the event feed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mood {
    Calm,
    Energetic,
    Anxious,
    Social,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Calm, Mood::Energetic, Mood::Anxious, Mood::Social];

    /// Event categories matching this mood.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Mood::Calm => &["art", "meetup", "date"],
            Mood::Energetic => &["music", "workshop"],
            Mood::Anxious => &["meetup", "workshop"],
            Mood::Social => &["meetup", "workshop", "comedy", "date"],
        }
    }

    /// Parses a query-string mood. Empty, "all" and unknown values mean no filter.
    pub fn parse_filter(value: &str) -> Option<Mood> {
        value.trim().parse().ok()
    }
}
