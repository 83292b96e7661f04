use crate::models::summary::MonthlySummary;
use serde::Serialize;

/// Flat per-employee row for tabular export formats.
#[derive(Debug, Serialize)]
pub struct SummaryExport {
    pub employee: String,
    pub period: String,
    pub present_days: f64,
    pub late_marks: u32,
    pub total_hours: f64,
    pub days_worked: f64,
    pub average_hours: f64,
}

impl From<&MonthlySummary> for SummaryExport {
    fn from(s: &MonthlySummary) -> Self {
        Self {
            employee: s.employee_name.clone(),
            period: format!("{:04}-{:02}", s.year, s.month),
            present_days: s.present_days,
            late_marks: s.late_mark_count,
            total_hours: round2(s.total_hours),
            days_worked: s.days_worked,
            average_hours: round2(s.average_hours),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
