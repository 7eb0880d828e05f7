// Zone report domain models and the dual-zone merge
use serde::Deserialize;
use std::collections::HashMap;

/// The two monitored areas: hijau (restricted) and merah (forbidden).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Hijau,
    Merah,
}

/// Snapshot of one zone as reported by the status API.
///
/// Counts default to 0 and `data` to empty so a sparse body still
/// deserializes; `offline: true` means the underlying source is down and the
/// rest of the report must be ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneReport {
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub totalin: i64,
    #[serde(default)]
    pub totalout: i64,
    #[serde(default)]
    pub totalcur: i64,
    #[serde(default)]
    pub data: Vec<DeptRow>,
}

/// Per-department counts within one zone report. `dept` is unique per report.
///
/// The counts are `Option` so an explicit 0 from the server is kept distinct
/// from a missing or null field; both render as 0, via [`DeptRow::counts`].
#[derive(Debug, Clone, Deserialize)]
pub struct DeptRow {
    pub dept: String,
    #[serde(rename = "in")]
    pub in_count: Option<i64>,
    #[serde(rename = "out")]
    pub out_count: Option<i64>,
    #[serde(rename = "cur")]
    pub cur_count: Option<i64>,
}

impl DeptRow {
    pub fn counts(&self) -> ZoneCounts {
        ZoneCounts {
            in_count: self.in_count.unwrap_or(0),
            out_count: self.out_count.unwrap_or(0),
            cur_count: self.cur_count.unwrap_or(0),
        }
    }
}

/// Response body of the combined endpoint carrying both zones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllReport {
    #[serde(default)]
    pub hijau: ZoneReport,
    #[serde(default)]
    pub merah: ZoneReport,
}

impl AllReport {
    /// Either zone flagging offline poisons the whole snapshot.
    pub fn is_offline(&self) -> bool {
        self.hijau.offline || self.merah.offline
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneCounts {
    pub in_count: i64,
    pub out_count: i64,
    pub cur_count: i64,
}

/// One department's counts across both zones, dual mode only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRow {
    pub dept: String,
    pub hijau: ZoneCounts,
    pub merah: ZoneCounts,
}

/// Left-join merah's rows onto hijau's, keyed by `dept`.
///
/// Output order is hijau's rows in their original order, then any
/// merah-only rows in merah's original order. Absent counts on either side
/// are zero-filled.
pub fn merge_reports(hijau: &ZoneReport, merah: &ZoneReport) -> Vec<MergedRow> {
    let mut rows: Vec<MergedRow> = Vec::with_capacity(hijau.data.len() + merah.data.len());
    let mut index: HashMap<&str, usize> = HashMap::new();

    for dept in &hijau.data {
        index.insert(dept.dept.as_str(), rows.len());
        rows.push(MergedRow {
            dept: dept.dept.clone(),
            hijau: dept.counts(),
            merah: ZoneCounts::default(),
        });
    }

    for dept in &merah.data {
        match index.get(dept.dept.as_str()) {
            Some(&at) => rows[at].merah = dept.counts(),
            None => rows.push(MergedRow {
                dept: dept.dept.clone(),
                hijau: ZoneCounts::default(),
                merah: dept.counts(),
            }),
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(dept: &str, in_count: i64, out_count: i64, cur_count: i64) -> DeptRow {
        DeptRow {
            dept: dept.to_string(),
            in_count: Some(in_count),
            out_count: Some(out_count),
            cur_count: Some(cur_count),
        }
    }

    fn report(rows: Vec<DeptRow>) -> ZoneReport {
        ZoneReport {
            data: rows,
            ..ZoneReport::default()
        }
    }

    #[test]
    fn merge_disjoint_depts_keeps_every_row() {
        let hijau = report(vec![row("HR", 1, 0, 1), row("QC", 3, 1, 2)]);
        let merah = report(vec![row("IT", 2, 1, 1)]);

        let merged = merge_reports(&hijau, &merah);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn merge_shared_dept_produces_one_row_with_both_sides() {
        let hijau = report(vec![row("HR", 5, 2, 3)]);
        let merah = report(vec![row("HR", 1, 1, 0)]);

        let merged = merge_reports(&hijau, &merah);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].dept, "HR");
        assert_eq!(
            merged[0].hijau,
            ZoneCounts { in_count: 5, out_count: 2, cur_count: 3 }
        );
        assert_eq!(
            merged[0].merah,
            ZoneCounts { in_count: 1, out_count: 1, cur_count: 0 }
        );
    }

    #[test]
    fn merge_zero_fills_the_missing_side() {
        let hijau = report(vec![row("HR", 1, 0, 1)]);
        let merah = report(vec![row("IT", 2, 1, 1)]);

        let merged = merge_reports(&hijau, &merah);
        assert_eq!(merged.len(), 2);

        assert_eq!(merged[0].dept, "HR");
        assert_eq!(merged[0].hijau.in_count, 1);
        assert_eq!(merged[0].hijau.out_count, 0);
        assert_eq!(merged[0].merah, ZoneCounts::default());

        assert_eq!(merged[1].dept, "IT");
        assert_eq!(merged[1].hijau, ZoneCounts::default());
        assert_eq!(merged[1].merah.in_count, 2);
        assert_eq!(merged[1].merah.out_count, 1);
    }

    #[test]
    fn merge_keeps_hijau_order_then_merah_only_order() {
        let hijau = report(vec![row("B", 0, 0, 0), row("A", 0, 0, 0)]);
        let merah = report(vec![row("D", 0, 0, 0), row("A", 0, 0, 0), row("C", 0, 0, 0)]);

        let merged = merge_reports(&hijau, &merah);
        let order: Vec<&str> = merged.iter().map(|r| r.dept.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "D", "C"]);
    }

    #[test]
    fn explicit_zero_count_is_not_treated_as_missing() {
        let dept = DeptRow {
            dept: "HR".to_string(),
            in_count: Some(0),
            out_count: None,
            cur_count: Some(4),
        };

        let counts = dept.counts();
        assert_eq!(counts.in_count, 0);
        assert_eq!(counts.out_count, 0);
        assert_eq!(counts.cur_count, 4);
    }

    #[test]
    fn report_deserializes_with_sparse_fields() {
        let report: ZoneReport = serde_json::from_str(
            r#"{"totalin": 5, "data": [{"dept": "HR", "in": 5, "cur": null}]}"#,
        )
        .unwrap();

        assert!(!report.offline);
        assert_eq!(report.totalin, 5);
        assert_eq!(report.totalout, 0);
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.data[0].in_count, Some(5));
        assert_eq!(report.data[0].out_count, None);
        assert_eq!(report.data[0].cur_count, None);
    }

    #[test]
    fn all_report_is_offline_when_either_zone_is() {
        let all: AllReport =
            serde_json::from_str(r#"{"hijau": {"offline": true}, "merah": {}}"#).unwrap();
        assert!(all.is_offline());

        let all: AllReport =
            serde_json::from_str(r#"{"hijau": {}, "merah": {"offline": true}}"#).unwrap();
        assert!(all.is_offline());

        let all: AllReport = serde_json::from_str(r#"{"hijau": {}, "merah": {}}"#).unwrap();
        assert!(!all.is_offline());
    }
}
