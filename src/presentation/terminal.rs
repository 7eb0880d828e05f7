// Terminal renderer - redraws the whole board on every update
use crate::domain::clock::ClockFace;
use crate::domain::zone::{MergedRow, ZoneReport};
use crate::presentation::surface::DisplaySurface;
use std::fmt::Write as _;
use std::io::Write as _;
use std::sync::Mutex;

const OFFLINE_BANNER: &str = "!! KONEKSI TERPUTUS - DATA TIDAK TERSEDIA !!";
const PLACEHOLDER_ROW: &str = "Data tidak tersedia";

/// Latest data snapshot. `Loading` only exists before the first poll
/// completes; afterwards every refresh replaces the board wholesale.
#[derive(Default)]
enum Board {
    #[default]
    Loading,
    Offline,
    Single(ZoneReport),
    Merged {
        hijau: ZoneReport,
        merah: ZoneReport,
        rows: Vec<MergedRow>,
    },
}

#[derive(Default)]
struct BoardState {
    clock: Option<ClockFace>,
    board: Board,
}

/// Renders the dashboard to stdout. The poll and clock tasks both write
/// through here, so the state sits behind a mutex and every call repaints
/// the full screen from the latest snapshot.
#[derive(Default)]
pub struct TerminalSurface {
    state: Mutex<BoardState>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn redraw(&self, state: &BoardState) {
        let mut out = String::new();
        // Clear screen, cursor home.
        out.push_str("\x1b[2J\x1b[H");

        if let Some(face) = &state.clock {
            let _ = writeln!(out, "{}", clock_line(face));
            out.push('\n');
        }

        match &state.board {
            Board::Loading => out.push_str("Memuat data...\n"),
            Board::Offline => out.push_str(&offline_board()),
            Board::Single(report) => out.push_str(&single_board(report)),
            Board::Merged { hijau, merah, rows } => {
                out.push_str(&merged_board(hijau, merah, rows))
            }
        }

        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(out.as_bytes());
        let _ = stdout.flush();
    }
}

impl DisplaySurface for TerminalSurface {
    fn render_single(&self, report: &ZoneReport) {
        let mut state = self.state.lock().unwrap();
        state.board = Board::Single(report.clone());
        self.redraw(&state);
    }

    fn render_merged(&self, hijau: &ZoneReport, merah: &ZoneReport, rows: &[MergedRow]) {
        let mut state = self.state.lock().unwrap();
        state.board = Board::Merged {
            hijau: hijau.clone(),
            merah: merah.clone(),
            rows: rows.to_vec(),
        };
        self.redraw(&state);
    }

    fn render_offline(&self) {
        let mut state = self.state.lock().unwrap();
        state.board = Board::Offline;
        self.redraw(&state);
    }

    fn render_clock(&self, face: &ClockFace) {
        let mut state = self.state.lock().unwrap();
        state.clock = Some(face.clone());
        self.redraw(&state);
    }
}

fn clock_line(face: &ClockFace) -> String {
    format!("{}:{}:{}  {}", face.jam, face.menit, face.detik, face.tanggal)
}

fn single_board(report: &ZoneReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "IN: {}   OUT: {}   CURRENT: {}",
        report.totalin, report.totalout, report.totalcur
    );
    out.push('\n');
    let _ = writeln!(out, "{:<24} {:>6} {:>6} {:>8}", "DEPARTEMEN", "IN", "OUT", "CURRENT");
    for dept in &report.data {
        let c = dept.counts();
        let _ = writeln!(
            out,
            "{:<24} {:>6} {:>6} {:>8}",
            dept.dept, c.in_count, c.out_count, c.cur_count
        );
    }
    out
}

fn merged_board(hijau: &ZoneReport, merah: &ZoneReport, rows: &[MergedRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>16} {:>17} {:>17} {:>18} {:>17} {:>18}",
        "DEPARTEMEN",
        format!("TERBATAS IN ({})", hijau.totalin),
        format!("TERBATAS OUT ({})", hijau.totalout),
        format!("TERLARANG IN ({})", merah.totalin),
        format!("TERLARANG OUT ({})", merah.totalout),
        format!("TERBATAS CUR ({})", hijau.totalcur),
        format!("TERLARANG CUR ({})", merah.totalcur),
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<24} {:>16} {:>17} {:>17} {:>18} {:>17} {:>18}",
            row.dept,
            row.hijau.in_count,
            row.hijau.out_count,
            row.merah.in_count,
            row.merah.out_count,
            row.hijau.cur_count,
            row.merah.cur_count,
        );
    }
    out
}

fn offline_board() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", OFFLINE_BANNER);
    out.push('\n');
    let _ = writeln!(out, "IN: -   OUT: -   CURRENT: -");
    out.push('\n');
    let _ = writeln!(out, "{}", PLACEHOLDER_ROW);
    out
}
