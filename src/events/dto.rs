use super::model::{Event, EventDate};
use serde::Deserialize;
use tracing::warn;

// Mongo-backed deployments send `_id` instead of `id`
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub title: String,
    pub venue: String,
    pub address: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "ticketUrl")]
    pub ticket_url: Option<String>,
}

impl EventResponse {
    /// `position` stands in for the id when the payload carries none.
    pub fn to_model(&self, position: usize) -> Event {
        let date = EventDate::parse(&self.date);

        if let EventDate::Unparsed(raw) = &date {
            warn!("Event '{}' has an unreadable date: '{}'", self.title, raw);
        }

        Event::new(
            self.id.clone().unwrap_or_else(|| position.to_string()),
            self.title.to_string(),
            self.venue.to_string(),
            self.address.to_string(),
            date,
            self.time.to_string(),
            self.description.clone(),
            self.ticket_url.clone(),
        )
    }
}

/// `Ok(None)` when the body is empty or `null`.
pub fn parse_events(body: &str) -> Result<Option<Vec<Event>>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let parsed = serde_json::from_str::<Option<Vec<EventResponse>>>(body)?;

    Ok(parsed.map(|responses| {
        responses
            .iter()
            .enumerate()
            .map(|(position, response)| response.to_model(position))
            .collect()
    }))
}
