use super::model::{BookingInquiry, ContactMessage, InvalidField, NewsletterSubscription};
use super::notice::Notice;
use crate::http::{Endpoint, HttpResponse, Transport, TransportError};
use reqwest::Url;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid form: {0}")]
    Invalid(InvalidField),
    #[error("no endpoint configured for this form")]
    NotConfigured,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("submission rejected with status {0}")]
    Rejected(u16),
    #[error("could not encode submission: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<InvalidField> for SubmissionError {
    fn from(field: InvalidField) -> Self {
        SubmissionError::Invalid(field)
    }
}

/// Where a booking inquiry ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingReceipt {
    pub captured: bool,
    pub stored: bool,
}

pub struct FormsAPI {
    backend_url: Option<Url>,
    form_capture_url: Option<Url>,
    transport: Arc<dyn Transport>,
}

impl FormsAPI {
    pub fn new(
        backend_url: Option<Url>,
        form_capture_url: Option<Url>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            backend_url,
            form_capture_url,
            transport,
        }
    }

    #[instrument(skip_all, err)]
    pub async fn subscribe_newsletter(
        &self,
        subscription: &NewsletterSubscription,
    ) -> Result<(), SubmissionError> {
        subscription.validate()?;

        self.post_to_backend(Endpoint::Newsletter, subscription).await?;

        info!("Subscribed to newsletter");
        Ok(())
    }

    #[instrument(skip_all, err, fields(subject = %message.subject))]
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), SubmissionError> {
        message.validate()?;

        self.post_to_backend(Endpoint::Contact, message).await?;

        info!("Contact message sent");
        Ok(())
    }

    /// Sends the inquiry to the form capture service and the backend at the same time. Neither
    /// depends on the other; the inquiry counts as sent if either one took it.
    #[instrument(skip_all, err, fields(event_type = %inquiry.event_type))]
    pub async fn submit_booking(
        &self,
        inquiry: &BookingInquiry,
    ) -> Result<BookingReceipt, SubmissionError> {
        inquiry.validate()?;

        if self.form_capture_url.is_none() && self.backend_url.is_none() {
            return Err(SubmissionError::NotConfigured);
        }

        let (captured, stored) = futures::join!(
            self.capture_booking(inquiry),
            self.store_booking(inquiry)
        );

        let receipt = BookingReceipt {
            captured: Self::settled("form capture", &captured),
            stored: Self::settled("backend", &stored),
        };

        if receipt.captured || receipt.stored {
            info!("Booking inquiry sent: {:?}", receipt);
            return Ok(receipt);
        }

        // Both channels failed; surface the capture error, or the backend's when there is no capture
        match (captured, stored) {
            (Some(Err(err)), _) | (None, Some(Err(err))) => Err(err),
            _ => Err(SubmissionError::NotConfigured),
        }
    }

    pub async fn subscribe_newsletter_notice(&self, subscription: &NewsletterSubscription) -> Notice {
        let notice = match self.subscribe_newsletter(subscription).await {
            Ok(()) => Notice::success("Success!", "Thank you for subscribing to our newsletter."),
            Err(_) => Notice::error("Failed to subscribe. Please try again."),
        };

        Self::shown(notice)
    }

    pub async fn send_contact_notice(&self, message: &ContactMessage) -> Notice {
        let notice = match self.send_contact(message).await {
            Ok(()) => Notice::success("Message Sent!", "We'll get back to you soon."),
            Err(_) => Notice::error("Failed to send message. Please try again."),
        };

        Self::shown(notice)
    }

    pub async fn submit_booking_notice(&self, inquiry: &BookingInquiry) -> Notice {
        let notice = match self.submit_booking(inquiry).await {
            Ok(_) => Notice::success(
                "Booking Inquiry Sent!",
                "We'll get back to you within 24 hours.",
            ),
            Err(_) => Notice::error("Failed to send inquiry. Please try again."),
        };

        Self::shown(notice)
    }

    fn shown(notice: Notice) -> Notice {
        if notice.is_error() {
            warn!("Showing notice '{}'", notice);
        } else {
            info!("Showing notice '{}'", notice);
        }

        notice
    }

    async fn capture_booking(
        &self,
        inquiry: &BookingInquiry,
    ) -> Option<Result<(), SubmissionError>> {
        let url = self.form_capture_url.as_ref()?;

        Some(
            self.transport
                .post_form(url, &inquiry.capture_fields())
                .await
                .map_err(SubmissionError::from)
                .and_then(Self::accepted),
        )
    }

    async fn store_booking(&self, inquiry: &BookingInquiry) -> Option<Result<(), SubmissionError>> {
        self.backend_url.as_ref()?;

        Some(self.post_to_backend(Endpoint::Bookings, inquiry).await)
    }

    async fn post_to_backend<T: Serialize>(
        &self,
        endpoint: Endpoint,
        body: &T,
    ) -> Result<(), SubmissionError> {
        let backend_url = self
            .backend_url
            .as_ref()
            .ok_or(SubmissionError::NotConfigured)?;
        let url = endpoint.url(backend_url)?;
        let body = serde_json::to_value(body)?;

        let response = self.transport.post_json(&url, &body).await?;

        Self::accepted(response)
    }

    fn accepted(response: HttpResponse) -> Result<(), SubmissionError> {
        if response.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected(response.status))
        }
    }

    fn settled(channel: &str, outcome: &Option<Result<(), SubmissionError>>) -> bool {
        match outcome {
            None => false,
            Some(Ok(())) => true,
            Some(Err(err)) => {
                warn!("Booking submission to {} failed: {}", channel, err);
                false
            }
        }
    }
}
