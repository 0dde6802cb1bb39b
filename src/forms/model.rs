use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub const BOOKING_FORM_NAME: &str = "booking-form";

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Failed to create email regex");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidField {
    Missing(&'static str),
    Email(String),
}

impl std::fmt::Display for InvalidField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidField::Missing(field) => write!(f, "'{}' is required", field),
            InvalidField::Email(email) => write!(f, "'{}' is not a valid email", email),
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<(), InvalidField> {
    if value.trim().is_empty() {
        Err(InvalidField::Missing(field))
    } else {
        Ok(())
    }
}

fn email(value: &str) -> Result<(), InvalidField> {
    required("email", value)?;

    if EMAIL_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        Err(InvalidField::Email(value.to_string()))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: String,
    pub venue: String,
    pub configuration: String,
    pub message: String,
}

impl BookingInquiry {
    pub fn validate(&self) -> Result<(), InvalidField> {
        required("name", &self.name)?;
        email(&self.email)?;
        required("eventType", &self.event_type)
    }

    /// URL-encoded body for the form capture service, form name first.
    pub fn capture_fields(&self) -> Vec<(String, String)> {
        [
            ("form-name", BOOKING_FORM_NAME),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("eventType", self.event_type.as_str()),
            ("eventDate", self.event_date.as_str()),
            ("venue", self.venue.as_str()),
            ("configuration", self.configuration.as_str()),
            ("message", self.message.as_str()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterSubscription {
    pub email: String,
}

impl NewsletterSubscription {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), InvalidField> {
        email(&self.email)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), InvalidField> {
        required("firstName", &self.first_name)?;
        required("lastName", &self.last_name)?;
        email(&self.email)?;
        required("subject", &self.subject)?;
        required("message", &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> BookingInquiry {
        BookingInquiry {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            event_type: "wedding".to_string(),
            ..Default::default()
        }
    }

    #[test_log::test]
    fn booking_only_needs_name_email_and_event_type() {
        assert_eq!(booking().validate(), Ok(()));
    }

    #[test_log::test]
    fn booking_without_event_type_should_be_invalid() {
        let inquiry = BookingInquiry {
            event_type: " ".to_string(),
            ..booking()
        };

        assert_eq!(inquiry.validate(), Err(InvalidField::Missing("eventType")));
    }

    #[test_log::test]
    fn should_reject_malformed_email() {
        assert_eq!(
            NewsletterSubscription::new("not-an-email").validate(),
            Err(InvalidField::Email("not-an-email".to_string()))
        );
        assert_eq!(
            NewsletterSubscription::new("").validate(),
            Err(InvalidField::Missing("email"))
        );
    }

    #[test_log::test]
    fn should_serialize_camel_case_fields() {
        let json = serde_json::to_value(booking()).unwrap();

        assert_eq!(json["eventType"], "wedding");
        assert_eq!(json["eventDate"], "");
        assert!(json.get("event_type").is_none());

        let contact = serde_json::to_value(ContactMessage {
            first_name: "Ana".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(contact["firstName"], "Ana");
    }

    #[test_log::test]
    fn capture_fields_should_start_with_form_name() {
        let fields = booking().capture_fields();

        assert_eq!(
            fields.first(),
            Some(&("form-name".to_string(), BOOKING_FORM_NAME.to_string()))
        );
        assert_eq!(fields.len(), 9);
        assert!(fields.contains(&("phone".to_string(), String::new())));
    }
}
