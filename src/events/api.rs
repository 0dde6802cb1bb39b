use super::dto::parse_events;
use super::fallback::fallback_events;
use super::model::Event;
use crate::http::{Endpoint, Transport, TransportError};
use reqwest::Url;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

pub struct EventsAPI {
    backend_url: Option<Url>,
    transport: Arc<dyn Transport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    Remote,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    NoEvents,
    Failed,
}

#[derive(Debug, Clone)]
pub struct LoadedEvents {
    pub events: Vec<Event>,
    pub source: EventSource,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("events endpoint answered with status {0}")]
    Status(u16),
    #[error("invalid events payload: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl EventsAPI {
    pub fn new(backend_url: Option<Url>, transport: Arc<dyn Transport>) -> Self {
        Self {
            backend_url,
            transport,
        }
    }

    /// Always yields something to show: the remote events, or the fallback list.
    pub async fn load_events(&self) -> Vec<Event> {
        self.load_events_with_source().await.events
    }

    #[instrument(skip(self), fields(backend = ?self.backend_url.as_ref().map(Url::as_str)))]
    pub async fn load_events_with_source(&self) -> LoadedEvents {
        let Some(backend_url) = &self.backend_url else {
            info!("No backend URL configured, using static events");
            return Self::fallback(FallbackReason::NotConfigured);
        };

        match self.fetch_events(backend_url).await {
            Ok(Some(events)) if !events.is_empty() => {
                info!("Got {} events from backend", events.len());
                LoadedEvents {
                    events,
                    source: EventSource::Remote,
                }
            }
            Ok(_) => {
                warn!("Backend has no events, using static events");
                Self::fallback(FallbackReason::NoEvents)
            }
            Err(err) => {
                error!("Failed to fetch events, using static fallback: {}", err);
                Self::fallback(FallbackReason::Failed)
            }
        }
    }

    async fn fetch_events(&self, backend_url: &Url) -> Result<Option<Vec<Event>>, FeedError> {
        let url = Endpoint::Events.url(backend_url)?;
        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            return Err(FeedError::Status(response.status));
        }

        Ok(parse_events(&response.body)?)
    }

    fn fallback(reason: FallbackReason) -> LoadedEvents {
        LoadedEvents {
            events: fallback_events(),
            source: EventSource::Fallback(reason),
        }
    }
}
