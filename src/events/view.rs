use super::api::EventsAPI;
use super::fallback::fallback_events;
use super::model::Event;
use super::partition::{partition, Gigs};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// State owned by one mounted gigs page. The fetch runs in its own task; its result only
/// lands through `settle`, so a view that is dropped mid-fetch never sees it.
pub struct GigsView {
    events: Vec<Event>,
    loading: bool,
    pending: Option<PendingLoad>,
}

struct PendingLoad {
    handle: JoinHandle<Vec<Event>>,
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl GigsView {
    /// Must be called inside a tokio runtime.
    pub fn mount(api: Arc<EventsAPI>) -> Self {
        let handle = tokio::spawn(async move { api.load_events().await });

        Self {
            events: fallback_events(),
            loading: true,
            pending: Some(PendingLoad { handle }),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Waits for the in-flight load, if any, and applies it.
    pub async fn settle(&mut self) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };

        match (&mut pending.handle).await {
            Ok(events) => {
                debug!("Applying {} loaded events", events.len());
                self.events = events;
            }
            Err(err) => warn!("Events load did not finish, keeping static events: {}", err),
        }

        self.loading = false;
    }

    pub fn sections(&self, today: NaiveDate) -> Gigs {
        partition(&self.events, today)
    }

    pub fn unmount(self) {
        if self.pending.is_some() {
            debug!("Unmounting with a load in flight, discarding it");
        }
    }
}
