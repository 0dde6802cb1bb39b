use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    /// Without it the site runs offline: static gigs, no backend form submissions
    pub backend_url: Option<Url>,
    pub form_capture_url: Option<Url>,
    pub request_timeout: Duration,
    pub loki_url: Option<Url>,
}
