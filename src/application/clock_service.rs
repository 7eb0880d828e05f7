// Clock service - formats the current time once per tick
use crate::domain::clock::{display_time, ClockFace};
use crate::presentation::surface::DisplaySurface;
use chrono::Local;
use std::sync::Arc;

pub struct ClockService {
    surface: Arc<dyn DisplaySurface>,
}

impl ClockService {
    pub fn new(surface: Arc<dyn DisplaySurface>) -> Self {
        Self { surface }
    }

    pub fn tick(&self) {
        let now = Local::now();
        let offset_secs = now.offset().local_minus_utc();
        let face = ClockFace::from_datetime(display_time(now.naive_local(), offset_secs));
        self.surface.render_clock(&face);
    }
}
