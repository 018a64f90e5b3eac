//! Reduction report output
//!
//! A [`ReductionReport`] collects every reduced sight of a fix and, when the
//! fix was solved, its solution. Text, JSON and CSV formatters render it.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::fix::{Fix, FixSolution};
use crate::reduction::InterceptDirection;

/// Serializable summary of a worked fix
#[derive(Debug, Clone, Serialize)]
pub struct ReductionReport {
    pub fix_ut: NaiveDateTime,
    pub course_deg: f64,
    pub speed_kn: f64,
    pub sights: Vec<SightRow>,
    pub solution: Option<FixSolution>,
    /// Why the fix could not be solved
    pub error: Option<String>,
}

/// One reduced sight
#[derive(Debug, Clone, Serialize)]
pub struct SightRow {
    /// 1-based LOP number
    pub lop: usize,
    pub body: String,
    /// Whether this sight is the one used for the fix
    pub selected: bool,
    pub ut: NaiveDateTime,
    pub hs_deg: f64,
    pub ha_deg: f64,
    pub hc_deg: f64,
    pub intercept_nm: f64,
    pub run_intercept_nm: f64,
    pub azimuth_deg: f64,
    pub direction: InterceptDirection,
}

impl ReductionReport {
    pub fn new(fix: &Fix, solution: Option<FixSolution>) -> Self {
        let mut sights = Vec::new();
        for (lop_index, lop) in fix.lops.iter().enumerate() {
            for (sight_index, sight) in lop.sights().iter().enumerate() {
                sights.push(SightRow {
                    lop: lop_index + 1,
                    body: lop.body().to_string(),
                    selected: lop.selected_index() == Some(sight_index),
                    ut: sight.ut,
                    hs_deg: sight.hs.degrees(),
                    ha_deg: sight.ha.degrees(),
                    hc_deg: sight.hc.degrees(),
                    intercept_nm: sight.intercept_nm,
                    run_intercept_nm: sight.run_intercept_nm,
                    azimuth_deg: sight.azimuth.degrees(),
                    direction: sight.direction(),
                });
            }
        }

        Self {
            fix_ut: fix.ut,
            course_deg: fix.course.degrees(),
            speed_kn: fix.speed_kn,
            sights,
            solution,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}

/// Human-readable text formatter
pub struct TextFormatter {
    /// Decimal places for intercepts and distances
    pub precision: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Format report as human-readable text
    pub fn format_text(&self, report: &ReductionReport) -> String {
        let p = self.precision;
        let mut output = String::new();

        output.push_str(&format!(
            "Running fix {} UT  COG {:05.1}  SOG {:.1} kn\n",
            report.fix_ut, report.course_deg, report.speed_kn
        ));

        let mut current_lop = 0;
        for row in &report.sights {
            if row.lop != current_lop {
                current_lop = row.lop;
                output.push_str(&format!("\nLOP {}  {}\n", row.lop, row.body));
            }
            output.push_str(&format!(
                "  {} {}  Hs {:8.4}  Ha {:8.4}  Hc {:8.4}  Ic {:+.p$} nm {}  run {:+.p$} nm  Az {:05.1}\n",
                if row.selected { '*' } else { ' ' },
                row.ut.format("%H:%M:%S"),
                row.hs_deg,
                row.ha_deg,
                row.hc_deg,
                row.intercept_nm,
                row.direction,
                row.run_intercept_nm,
                row.azimuth_deg,
                p = p
            ));
        }

        if let Some(solution) = &report.solution {
            output.push_str(&format!(
                "\nFix ({}): {}  {}\n",
                solution.method,
                solution.latitude.lat_str(),
                solution.longitude.lon_str()
            ));
            output.push_str(&format!(
                "  {:.p$} nm {:03.0} from AP {}  {}\n",
                solution.distance_nm,
                solution.bearing.degrees(),
                solution.assumed_latitude.lat_str(),
                solution.assumed_longitude.lon_str(),
                p = p
            ));
            output.push_str(&format!(
                "  Crossing {:.1}° ({}), {} LOPs",
                solution.crossing_angle_deg, solution.quality, solution.lop_count
            ));
            if solution.lop_count > 2 {
                output.push_str(&format!(", rms {:.p$} nm", solution.rms_residual_nm, p = p));
            }
            output.push('\n');
        }

        if let Some(error) = &report.error {
            output.push_str(&format!("\nNo fix: {}\n", error));
        }

        output
    }
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pretty-printing JSON formatter
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json(&self, report: &ReductionReport) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}

/// CSV formatter, one row per sight with the fix repeated on each row
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Get CSV header
    pub fn header(&self) -> String {
        "lop,body,selected,ut,hs,ha,hc,intercept_nm,run_intercept_nm,azimuth,direction,fix_lat,fix_lon".to_string()
    }

    pub fn format_csv(&self, report: &ReductionReport) -> String {
        let (fix_lat, fix_lon) = match &report.solution {
            Some(solution) => (
                format!("{:.6}", solution.latitude.degrees()),
                format!("{:.6}", solution.longitude.degrees()),
            ),
            None => (String::new(), String::new()),
        };

        let mut lines = Vec::with_capacity(report.sights.len() + 1);
        if self.include_header {
            lines.push(self.header());
        }
        for row in &report.sights {
            lines.push(format!(
                "{},{},{},{},{:.6},{:.6},{:.6},{:.4},{:.4},{:.4},{},{},{}",
                row.lop,
                csv_field(&row.body),
                row.selected,
                row.ut.format("%Y-%m-%dT%H:%M:%S"),
                row.hs_deg,
                row.ha_deg,
                row.hc_deg,
                row.intercept_nm,
                row.run_intercept_nm,
                row.azimuth_deg,
                row.direction,
                fix_lat,
                fix_lon
            ));
        }
        lines.join("\n")
    }
}

/// Quote a field that contains a delimiter or quote
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
