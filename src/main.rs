// Main entry point - Dependency injection and task setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;

use crate::application::clock_service::ClockService;
use crate::application::poll_service::{Mode, PollService};
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_repository::HttpStatusRepository;
use crate::presentation::surface::DisplaySurface;
use crate::presentation::terminal::TerminalSurface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration; the mode is resolved once and never re-read
    let config = load_dashboard_config()?;
    let mode = Mode::from_config_value(&config.server.zone);
    tracing::info!(
        "starting zona-dashboard against {} in {:?} mode",
        config.server.base_url,
        mode
    );

    // Repository (infrastructure layer)
    let repository = Arc::new(HttpStatusRepository::new(config.server.base_url.clone()));

    // Display surface (presentation layer)
    let surface: Arc<dyn DisplaySurface> = Arc::new(TerminalSurface::new());

    // Services (application layer)
    let poll_service = Arc::new(PollService::new(repository, surface.clone(), mode));
    let clock_service = ClockService::new(surface);

    let data_interval = Duration::from_secs(config.poll.data_interval_secs);
    let clock_interval = Duration::from_secs(config.poll.clock_interval_secs);

    // Both intervals fire immediately on the first tick, giving one run at
    // startup before the periodic cadence.
    let poll_task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(data_interval);
        loop {
            ticker.tick().await;
            // No in-flight guard: a slow fetch may overlap the next tick and
            // the last response to finish wins the render.
            let service = poll_service.clone();
            tokio::spawn(async move {
                service.refresh().await;
            });
        }
    });

    let clock_task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(clock_interval);
        loop {
            ticker.tick().await;
            clock_service.tick();
        }
    });

    // The widget polls forever; neither task returns under normal operation.
    let (poll_result, clock_result) = tokio::join!(poll_task, clock_task);
    poll_result?;
    clock_result?;

    Ok(())
}
