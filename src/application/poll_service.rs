// Poll service - one refresh cycle per tick, mode fixed at startup
use crate::application::status_repository::StatusRepository;
use crate::domain::zone::{merge_reports, Zone};
use crate::presentation::surface::DisplaySurface;
use std::sync::Arc;

/// Display mode, resolved once from configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Both zones side by side, merged per department.
    Dual,
    /// One zone's totals and rows.
    Single(Zone),
}

impl Mode {
    /// `"all"` selects dual mode, `"merah"` the alternate zone, and any
    /// other value falls back to the default zone.
    pub fn from_config_value(value: &str) -> Self {
        match value {
            "all" => Mode::Dual,
            "merah" => Mode::Single(Zone::Merah),
            _ => Mode::Single(Zone::Hijau),
        }
    }
}

pub struct PollService {
    repository: Arc<dyn StatusRepository>,
    surface: Arc<dyn DisplaySurface>,
    mode: Mode,
}

impl PollService {
    pub fn new(
        repository: Arc<dyn StatusRepository>,
        surface: Arc<dyn DisplaySurface>,
        mode: Mode,
    ) -> Self {
        Self {
            repository,
            surface,
            mode,
        }
    }

    /// Fetch the configured report(s) and rewrite the surface. Transport
    /// failures, malformed bodies, and server-flagged offline all land on
    /// the same offline render; the next tick retries on its own.
    pub async fn refresh(&self) {
        match self.mode {
            Mode::Dual => match self.repository.fetch_all().await {
                Ok(all) if all.is_offline() => {
                    tracing::debug!("a zone reports offline, rendering placeholder");
                    self.surface.render_offline();
                }
                Ok(all) => {
                    let rows = merge_reports(&all.hijau, &all.merah);
                    self.surface.render_merged(&all.hijau, &all.merah, &rows);
                }
                Err(e) => {
                    tracing::warn!("combined status fetch failed: {}", e);
                    self.surface.render_offline();
                }
            },
            Mode::Single(zone) => match self.repository.fetch_zone(zone).await {
                Ok(report) if report.offline => {
                    tracing::debug!("zone reports offline, rendering placeholder");
                    self.surface.render_offline();
                }
                Ok(report) => self.surface.render_single(&report),
                Err(e) => {
                    tracing::warn!("status fetch failed: {}", e);
                    self.surface.render_offline();
                }
            },
        }
    }
}
