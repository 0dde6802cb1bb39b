use chrono::Local;
use easternempire::config::env_loader::load_config;
use easternempire::events::api::EventsAPI;
use easternempire::events::partition::partition_at;
use easternempire::http::ReqwestTransport;
use easternempire::tracing::setup_tracing;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let loki = setup_tracing(config.loki_url.as_ref()).await;

    let transport = match ReqwestTransport::new(config.request_timeout) {
        Ok(transport) => Arc::new(transport),
        Err(err) => {
            error!("Couldn't build HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let api = EventsAPI::new(config.backend_url, transport);
    let gigs = partition_at(&api.load_events().await, &Local::now());

    info!("{} upcoming shows", gigs.upcoming.len());
    gigs.upcoming.iter().for_each(|event| {
        info!(
            "Upcoming {} at {}: {} ({})",
            event.date, event.time, event.title, event.venue
        )
    });

    info!("{} past performances", gigs.past.len());
    gigs.past
        .iter()
        .for_each(|event| info!("Past {}: {} ({})", event.date, event.title, event.venue));

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        let _ = handle.await;
    }

    ExitCode::SUCCESS
}
