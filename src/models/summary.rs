use super::status::DayStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One labeled cell as returned by the classifier. The pivot adds the
/// background override (Sunday/holiday shading wins over the label color,
/// the label itself is untouched).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedCell {
    pub status: DayStatus,
    pub display_text: String,
    pub color_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl ClassifiedCell {
    pub fn of(status: DayStatus) -> Self {
        Self {
            status,
            display_text: status.display_text().to_string(),
            color_key: status.color_key().to_string(),
            background: None,
        }
    }

    pub fn blank() -> Self {
        Self::of(DayStatus::Blank)
    }
}

/// One employee's month: a classified cell per calendar day plus the
/// aggregates. Recomputed wholesale on every build, never patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub employee_id: u32,
    pub employee_name: String,
    pub year: i32,
    pub month: u32,
    pub cells: BTreeMap<u32, ClassifiedCell>,
    pub present_days: f64,
    pub late_mark_count: u32,
    pub total_hours: f64,
    pub days_worked: f64,
    pub average_hours: f64,
}
