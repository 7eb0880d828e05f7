// Wall-clock formatting for the dashboard header
use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};

// Sunday-first, matching chrono's num_days_from_sunday.
const HARI: [&str; 7] = [
    "Minggu,", "Senin,", "Selasa,", "Rabu,", "Kamis,", "Jum'at,", "Sabtu,",
];

const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "Nopember",
    "Desember",
];

/// Formatted time-of-day plus date line, recomputed every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub jam: String,
    pub menit: String,
    pub detik: String,
    pub tanggal: String,
}

impl ClockFace {
    pub fn from_datetime(now: NaiveDateTime) -> Self {
        let hari = HARI[now.weekday().num_days_from_sunday() as usize];
        let bulan = BULAN[now.month0() as usize];

        Self {
            jam: format!("{:02}", now.hour()),
            menit: format!("{:02}", now.minute()),
            detik: format!("{:02}", now.second()),
            tanggal: format!("{} {} {} {}", hari, now.day(), bulan, now.year()),
        }
    }
}

/// Shift a local timestamp into the fixed display timezone (UTC+7).
///
/// Deliberately not a general conversion: when the runtime reports a zero
/// UTC offset the clock is assumed to actually be UTC and gets the +7h
/// shift; any other offset is trusted as already-local time.
pub fn display_time(local: NaiveDateTime, utc_offset_secs: i32) -> NaiveDateTime {
    if utc_offset_secs == 0 {
        local + TimeDelta::hours(7)
    } else {
        local
    }
}
