//! Google Events results fetched through SerpApi.

use std::{sync::LazyLock, time::Duration};

use regex::Regex;
use serde_json::Value;

use crate::categorize::map_event_category;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";

pub const UNTITLED: &str = "Untitled Event";
pub const NO_DESCRIPTION: &str = "No description";
pub const UNKNOWN_VENUE: &str = "Unknown Venue";
pub const DEFAULT_LAT: f64 = 12.97;
pub const DEFAULT_LON: f64 = 77.59;

static RE_WHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]when['"]\s*:\s*['"]([^'"]*)['"]"#).expect("valid when regex")
});

/// An external event normalised with the importer defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalEvent {
    pub title: String,
    pub description: String,
    pub location_name: String,
    pub event_time: String,
    pub lat: f64,
    pub lon: f64,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct SerpApi {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl SerpApi {
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            url: SERPAPI_URL.to_owned(),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, location: &str, limit: usize) -> anyhow::Result<Vec<ExternalEvent>> {
        let results: Value = self
            .client
            .get(&self.url)
            .query(&[
                ("engine", "google_events"),
                ("q", "events"),
                ("location", location),
                ("hl", "en"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let events = parse_events(&results, limit);
        tracing::info!(count = events.len(), "fetched external events");

        Ok(events)
    }
}

/// Reads up to `limit` entries of `events_results`.
pub fn parse_events(results: &Value, limit: usize) -> Vec<ExternalEvent> {
    let Some(entries) = results.get("events_results").and_then(Value::as_array) else {
        return vec![];
    };

    entries.iter().take(limit).map(parse_event).collect()
}

fn parse_event(entry: &Value) -> ExternalEvent {
    let location = entry.get("location");

    let title = text(entry, "title").unwrap_or(UNTITLED).to_owned();
    let description = text(entry, "description")
        .or_else(|| text(entry, "snippet"))
        .unwrap_or(NO_DESCRIPTION)
        .to_owned();
    let location_name = location
        .and_then(|l| text(l, "name"))
        .or_else(|| text(entry, "location_name"))
        .unwrap_or(UNKNOWN_VENUE)
        .to_owned();
    let lat = location
        .and_then(|l| number(l, "latitude"))
        .or_else(|| number(entry, "latitude"))
        .unwrap_or(DEFAULT_LAT);
    let lon = location
        .and_then(|l| number(l, "longitude"))
        .or_else(|| number(entry, "longitude"))
        .unwrap_or(DEFAULT_LON);
    let category = map_event_category(text(entry, "type"), Some(&title)).to_owned();

    ExternalEvent {
        event_time: event_time(entry),
        title,
        description,
        location_name,
        lat,
        lon,
        category,
    }
}

fn text<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
}

/// Coordinates arrive either as numbers or numeric strings. Zero counts as missing.
fn number(value: &Value, key: &str) -> Option<f64> {
    let number = match value.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;

    (number != 0.0).then_some(number)
}

/// `date.when` from the structured payload, or the `when` entry embedded in
/// a stringified `dates` mapping.
fn event_time(entry: &Value) -> String {
    if let Some(when) = entry.get("date").and_then(|d| text(d, "when")) {
        return when.to_owned();
    }

    entry
        .get("dates")
        .and_then(Value::as_str)
        .and_then(|dates| RE_WHEN.captures(dates))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default()
}
