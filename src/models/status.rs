use serde::{Deserialize, Serialize};

/// Classification outcome for one employee-day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayStatus {
    FullDay,
    HalfDay,
    LateMark,
    Absent,
    /// Some hours were logged, but fewer than the low-hours threshold.
    /// Rendered distinctly from a plain absence ("AB").
    AbsentLow,
    /// Enough accumulated hours to look real, but one punch boundary
    /// missing ("I").
    Incomplete,
    SiteVisitPresent,
    SiteVisitIncomplete,
    Holiday,
    #[default]
    Blank,
}

impl DayStatus {
    /// Short cell label used in grids and the date-wise listing.
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::FullDay => "P",
            DayStatus::HalfDay => "HD",
            DayStatus::LateMark => "L",
            DayStatus::Absent => "A",
            DayStatus::AbsentLow => "AB",
            DayStatus::Incomplete => "I",
            DayStatus::SiteVisitPresent => "SV",
            DayStatus::SiteVisitIncomplete => "SVI",
            DayStatus::Holiday => "H",
            DayStatus::Blank => "",
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            DayStatus::FullDay => "Full Day",
            DayStatus::HalfDay => "Half Day",
            DayStatus::LateMark => "Late Mark",
            DayStatus::Absent => "Absent",
            DayStatus::AbsentLow => "AB",
            DayStatus::Incomplete => "I",
            DayStatus::SiteVisitPresent => "Site Visit Present",
            DayStatus::SiteVisitIncomplete => "Site Visit Incomplete",
            DayStatus::Holiday => "Holiday",
            DayStatus::Blank => "",
        }
    }

    /// Stable key the rendering layer maps onto actual colors.
    pub fn color_key(&self) -> &'static str {
        match self {
            DayStatus::FullDay => "green",
            DayStatus::HalfDay => "yellow",
            DayStatus::LateMark => "orange",
            DayStatus::Absent => "red",
            DayStatus::AbsentLow => "red-bold",
            DayStatus::Incomplete => "grey",
            DayStatus::SiteVisitPresent => "blue",
            DayStatus::SiteVisitIncomplete => "blue-light",
            DayStatus::Holiday => "purple",
            DayStatus::Blank => "none",
        }
    }
}
