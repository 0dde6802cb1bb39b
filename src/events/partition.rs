use super::model::Event;
use chrono::{DateTime, NaiveDate, TimeZone};
use itertools::Itertools;
use tracing::warn;

/// Gigs page sections. Both `upcoming` and `past` are in ascending date order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Gigs {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
    /// Events whose date couldn't be read; never shown in either section
    pub unscheduled: Vec<Event>,
}

/// Splits on `today`: an event on `today` is still upcoming. Same-day events keep their
/// received order.
pub fn partition(events: &[Event], today: NaiveDate) -> Gigs {
    let mut gigs = Gigs::default();

    for event in events.iter().sorted_by_key(|event| event.date.as_date()) {
        match event.date.as_date() {
            Some(date) if date >= today => gigs.upcoming.push(event.clone()),
            Some(_) => gigs.past.push(event.clone()),
            None => {
                warn!("Leaving out '{}' ({}): unreadable date", event.title, event.date);
                gigs.unscheduled.push(event.clone())
            }
        }
    }

    gigs
}

pub fn partition_at<Tz: TimeZone>(events: &[Event], instant: &DateTime<Tz>) -> Gigs {
    partition(events, instant.date_naive())
}
