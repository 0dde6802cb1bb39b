use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Backend routes, all served under `{base}/api/`.
#[derive(strum::IntoStaticStr, Debug, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum Endpoint {
    Events,
    Bookings,
    Newsletter,
    Contact,
}

impl Endpoint {
    /// Appends `/api/{endpoint}` to the base path, keeping any prefix it already has. Query and
    /// fragment of the base are dropped.
    pub fn url(self, base: &Url) -> Result<Url, TransportError> {
        let path: &'static str = self.into();
        let mut url = base.clone();

        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(["api", path]);

        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Request(String),
    #[error("invalid url {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// The network seam of the crate. Status codes are returned as data; only failures to get any
/// response at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;

    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpResponse, TransportError>;

    async fn post_form(
        &self,
        url: &Url,
        fields: &[(String, String)],
    ) -> Result<HttpResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Got status {} with {} bytes", status, body.len());

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip_all, fields(url = %url))]
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;

        Self::read(response).await
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpResponse, TransportError> {
        let response = self.client.post(url.clone()).json(body).send().await?;

        Self::read(response).await
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn post_form(
        &self,
        url: &Url,
        fields: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        let response = self.client.post(url.clone()).form(fields).send().await?;

        Self::read(response).await
    }
}
