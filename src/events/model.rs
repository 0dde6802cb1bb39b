use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Display;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub address: String,
    pub date: EventDate,
    /// Free text such as "7:00 PM", shown as is
    pub time: String,
    pub description: Option<String>,
    pub ticket_url: Option<String>,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        title: String,
        venue: String,
        address: String,
        date: EventDate,
        time: String,
        description: Option<String>,
        ticket_url: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            venue,
            address,
            date,
            time,
            description,
            ticket_url: ticket_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn has_tickets(&self) -> bool {
        self.ticket_url.is_some()
    }
}

/// Wall-clock calendar date of a show. Dates that can't be read are kept verbatim so they can
/// be reported instead of silently misplaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDate {
    On(NaiveDate),
    Unparsed(String),
}

impl EventDate {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|date_time| date_time.date_naive())
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
                    .ok()
                    .map(|date_time| date_time.date())
            })
            .map(EventDate::On)
            .unwrap_or_else(|| EventDate::Unparsed(raw.to_string()))
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            EventDate::On(date) => Some(*date),
            EventDate::Unparsed(_) => None,
        }
    }
}

impl Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventDate::On(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            EventDate::Unparsed(raw) => write!(f, "{}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_parse_plain_iso_date() {
        assert_eq!(
            EventDate::parse("2025-10-25"),
            EventDate::On(NaiveDate::from_ymd_opt(2025, 10, 25).unwrap())
        );
    }

    #[test_log::test]
    fn should_use_calendar_date_of_a_date_time() {
        let expected = EventDate::On(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());

        assert_eq!(EventDate::parse("2025-12-31T21:00:00+11:00"), expected);
        assert_eq!(EventDate::parse("2025-12-31T21:00:00"), expected);
    }

    #[test_log::test]
    fn when_a_date_is_invalid_should_keep_it_unparsed() {
        assert_eq!(
            EventDate::parse("sometime in spring"),
            EventDate::Unparsed("sometime in spring".to_string())
        );
        assert_eq!(
            EventDate::parse("2025-02-30"),
            EventDate::Unparsed("2025-02-30".to_string())
        );
    }

    #[test_log::test]
    fn should_drop_blank_ticket_url() {
        let event = Event::new(
            "1".to_string(),
            "Gig".to_string(),
            "Hall".to_string(),
            "1 Street".to_string(),
            EventDate::parse("2025-01-01"),
            "8:00 PM".to_string(),
            None,
            Some("  ".to_string()),
        );

        assert!(!event.has_tickets());
    }
}
