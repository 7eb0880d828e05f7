// Display surface seam between the services and the renderer
use crate::domain::clock::ClockFace;
use crate::domain::zone::{MergedRow, ZoneReport};

/// Write-only view of the dashboard. Every call replaces the prior render
/// wholesale; implementations carry no data forward between calls and take
/// immutable snapshots, so a render never feeds back into the next cycle.
pub trait DisplaySurface: Send + Sync {
    /// One zone: totals plus a row per department.
    fn render_single(&self, report: &ZoneReport);

    /// Both zones merged per department; header labels carry each zone's
    /// totals.
    fn render_merged(&self, hijau: &ZoneReport, merah: &ZoneReport, rows: &[MergedRow]);

    /// Offline banner, blanked totals, and a single placeholder row.
    fn render_offline(&self);

    /// Current wall-clock face.
    fn render_clock(&self, face: &ClockFace);
}
