use super::model::{Event, EventDate};
use lazy_static::lazy_static;

lazy_static! {
    /// Shown whenever the backend is not configured or can't be reached.
    pub static ref FALLBACK_EVENTS: Vec<Event> = vec![
        show(
            "1",
            "Sydney Festival 2025",
            "Domain Theatre",
            "1 Art Gallery Road, The Domain, Sydney NSW 2000",
            "2025-08-15",
            "7:00 PM",
            "Join us for an unforgettable evening of South Asian fusion music at Sydney Festival 2025. Experience Eastern Empire's electrifying performance featuring both traditional and contemporary hits.",
            Some("https://www.sydneyfestival.org.au/"),
        ),
        show(
            "2",
            "Cultural Night at Opera House",
            "Sydney Opera House - Studio",
            "Bennelong Point, Sydney NSW 2000",
            "2025-09-20",
            "8:00 PM",
            "An intimate evening celebrating South Asian music and culture. Limited seating available.",
            Some("https://www.sydneyoperahouse.com/"),
        ),
        show(
            "3",
            "Diwali Festival Performance",
            "Parramatta Park",
            "Pitt Street & Macquarie Street, Parramatta NSW 2150",
            "2025-10-25",
            "6:00 PM",
            "Celebrate the festival of lights with Eastern Empire! Free entry, family-friendly event.",
            None,
        ),
        show(
            "4",
            "New Year's Eve Gala",
            "The Star Event Centre",
            "80 Pyrmont Street, Pyrmont NSW 2009",
            "2025-12-31",
            "9:00 PM",
            "Ring in the New Year with Eastern Empire! A spectacular night of music, dance, and celebration. Black tie event with dinner and entertainment.",
            Some("https://www.star.com.au/"),
        ),
        show(
            "5",
            "Australia Day Concert",
            "Darling Harbour",
            "Darling Harbour, Sydney NSW 2000",
            "2026-01-26",
            "6:30 PM",
            "Celebrate Australia Day with Eastern Empire at this free outdoor concert. Bring your family and friends for an evening of multicultural music under the stars.",
            None,
        ),
        show(
            "6",
            "Valentine's Concert Series",
            "City Recital Hall",
            "2 Angel Place, Sydney NSW 2000",
            "2026-02-14",
            "7:30 PM",
            "An intimate evening of romantic melodies and timeless classics. Perfect date night experience featuring Eastern Empire's signature blend of traditional and contemporary sounds.",
            Some("https://www.cityrecitalhall.com/"),
        ),
    ];
}

#[allow(clippy::too_many_arguments)]
fn show(
    id: &str,
    title: &str,
    venue: &str,
    address: &str,
    date: &str,
    time: &str,
    description: &str,
    ticket_url: Option<&str>,
) -> Event {
    Event::new(
        id.to_string(),
        title.to_string(),
        venue.to_string(),
        address.to_string(),
        EventDate::parse(date),
        time.to_string(),
        Some(description.to_string()),
        ticket_url.map(str::to_string),
    )
}

pub fn fallback_events() -> Vec<Event> {
    FALLBACK_EVENTS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn every_fallback_event_should_have_a_readable_date() {
        assert!(!FALLBACK_EVENTS.is_empty());
        assert!(FALLBACK_EVENTS.iter().all(|event| event.date.as_date().is_some()));
    }

    #[test_log::test]
    fn fallback_ids_should_be_unique() {
        let mut ids: Vec<&str> = FALLBACK_EVENTS.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), FALLBACK_EVENTS.len());
    }
}
