use crate::{
    categorize::GENERAL,
    repository::{self, EventPatch, NewEvent},
    serpapi::{ExternalEvent, UNKNOWN_VENUE},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub updated: usize,
    pub total: i64,
}

impl super::Command {
    /// Stores external events, keyed by title and coordinates.
    ///
    /// Known events only get their gaps filled: a `general` category is
    /// upgraded, and an empty time, empty or unknown venue, or missing
    /// coordinates are taken from the import.
    #[tracing::instrument(skip_all, fields(count = events.len()))]
    pub async fn import(&self, events: Vec<ExternalEvent>) -> moodmeet_shared::Result<ImportReport> {
        let mut tx = self.0.begin().await?;
        let mut report = ImportReport::default();
        let mut added = Vec::new();

        for event in events {
            let Some(existing) = repository::find_imported(&mut tx, &event).await? else {
                if added.iter().any(|a: &ExternalEvent| {
                    a.title == event.title && a.lat == event.lat && a.lon == event.lon
                }) {
                    continue;
                }

                added.push(event);
                continue;
            };

            let mut patch = EventPatch::default();

            if existing.category.as_deref() == Some(GENERAL) && event.category != GENERAL {
                patch.category = Some(event.category);
            }

            if existing.event_time.as_deref().unwrap_or_default().is_empty()
                && !event.event_time.is_empty()
            {
                patch.event_time = Some(event.event_time);
            }

            let venue = existing.location_name.as_deref().unwrap_or_default();
            if venue.is_empty() || venue == UNKNOWN_VENUE {
                patch.location_name = Some(event.location_name);
            }

            if existing.lat.unwrap_or_default() == 0.0 || existing.lon.unwrap_or_default() == 0.0 {
                patch.coordinates = Some((event.lat, event.lon));
            }

            if !patch.is_empty() {
                report.updated += 1;
                repository::update_event(&mut tx, existing.id, patch).await?;
            }
        }

        report.added = added.len();

        let rows = added
            .into_iter()
            .map(|event| NewEvent {
                title: event.title,
                description: Some(event.description),
                location_name: Some(event.location_name),
                event_time: Some(event.event_time),
                lat: event.lat,
                lon: event.lon,
                category: event.category,
            })
            .collect();

        repository::create_events(&mut tx, rows).await?;
        report.total = repository::count(&mut tx).await?;

        tx.commit().await?;

        tracing::info!(
            added = report.added,
            updated = report.updated,
            total = report.total,
            "imported external events"
        );

        Ok(report)
    }
}
