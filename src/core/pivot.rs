//! Monthly pivot: a classified cell per employee per calendar day, plus
//! the per-employee aggregates. Always a full recompute over the records
//! handed in, so re-running after a new paste or a new holiday cannot
//! leave stale cells behind.

use crate::core::classifier::{absent_placeholder, classify_day, ClassifierConfig};
use crate::models::day_record::DayRecord;
use crate::models::employee::Employee;
use crate::models::holiday::{holiday_on, Holiday};
use crate::models::status::DayStatus;
use crate::models::summary::{ClassifiedCell, MonthlySummary};
use crate::utils::date::{all_days_of_month, today};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One record with its label, for the date-wise listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub record: DayRecord,
    pub cell: ClassifiedCell,
}

/// Date-wise view: classify each record directly, no synthesis of
/// missing days. Records whose date does not parse still classify; the
/// weekday falls back to Monday so the weekday table applies.
pub fn classify_records(
    records: &[DayRecord],
    holidays: &[Holiday],
    cfg: &ClassifierConfig,
) -> Vec<ClassifiedRecord> {
    records
        .iter()
        .map(|r| {
            let weekday = NaiveDate::parse_from_str(&r.date, "%Y-%m-%d")
                .map(|d| d.weekday())
                .unwrap_or(Weekday::Mon);
            ClassifiedRecord {
                record: r.clone(),
                cell: classify_day(r, holidays, weekday, cfg),
            }
        })
        .collect()
}

/// Build the monthly grid and aggregates for every employee in the
/// roster. "Past day" synthesis is evaluated against today.
pub fn build_monthly_pivot(
    records: &[DayRecord],
    holidays: &[Holiday],
    year: i32,
    month: u32,
    employees: &[Employee],
    cfg: &ClassifierConfig,
) -> Vec<MonthlySummary> {
    build_monthly_pivot_as_of(records, holidays, year, month, employees, cfg, today())
}

/// Same as `build_monthly_pivot` with an explicit "now" boundary, so the
/// past-day rule is reproducible in tests.
#[allow(clippy::too_many_arguments)]
pub fn build_monthly_pivot_as_of(
    records: &[DayRecord],
    holidays: &[Holiday],
    year: i32,
    month: u32,
    employees: &[Employee],
    cfg: &ClassifierConfig,
    as_of: NaiveDate,
) -> Vec<MonthlySummary> {
    let days = all_days_of_month(year, month);

    // (employee, date) → record for this month
    let mut by_key: HashMap<(&str, &str), &DayRecord> = HashMap::new();
    for r in records {
        by_key.insert((r.employee_name.as_str(), r.date.as_str()), r);
    }

    employees
        .iter()
        .map(|emp| {
            let mut cells: BTreeMap<u32, ClassifiedCell> = BTreeMap::new();
            let mut present_days = 0.0;
            let mut late_mark_count = 0u32;
            let mut total_hours = 0.0;
            let mut days_worked = 0.0;

            for day in &days {
                let date_str = day.format("%Y-%m-%d").to_string();
                let record = by_key.get(&(emp.name.as_str(), date_str.as_str()));

                let mut cell = match record {
                    Some(r) => classify_day(r, holidays, day.weekday(), cfg),
                    None => synthesize_cell(*day, &date_str, holidays, as_of),
                };

                // Background shading wins over the label color; the label
                // itself stays whatever the classifier returned.
                let location = record.and_then(|r| r.location_code.as_deref());
                if holiday_on(holidays, &date_str, location).is_some() {
                    cell.background = Some("holiday".to_string());
                } else if day.weekday() == Weekday::Sun {
                    cell.background = Some("sunday".to_string());
                }

                let hours = record.map(|r| r.work_hours).unwrap_or(0.0);
                match cell.status {
                    DayStatus::FullDay | DayStatus::SiteVisitPresent => {
                        present_days += 1.0;
                        days_worked += 1.0;
                        total_hours += hours;
                    }
                    DayStatus::LateMark => {
                        present_days += 1.0;
                        days_worked += 1.0;
                        total_hours += hours;
                        late_mark_count += 1;
                    }
                    DayStatus::HalfDay => {
                        present_days += 0.5;
                        days_worked += 0.5;
                        total_hours += hours;
                    }
                    // Hours count, presence does not.
                    DayStatus::SiteVisitIncomplete | DayStatus::Incomplete => {
                        total_hours += hours;
                    }
                    DayStatus::Absent
                    | DayStatus::AbsentLow
                    | DayStatus::Holiday
                    | DayStatus::Blank => {}
                }

                cells.insert(day.day(), cell);
            }

            let average_hours = if days_worked > 0.0 {
                total_hours / days_worked
            } else {
                0.0
            };

            MonthlySummary {
                employee_id: emp.id,
                employee_name: emp.name.clone(),
                year,
                month,
                cells,
                present_days,
                late_mark_count,
                total_hours,
                days_worked,
                average_hours,
            }
        })
        .collect()
}

/// No record at all: a past, non-Sunday, non-holiday date reads as
/// Absent; anything else stays blank.
fn synthesize_cell(
    day: NaiveDate,
    date_str: &str,
    holidays: &[Holiday],
    as_of: NaiveDate,
) -> ClassifiedCell {
    if day < as_of && day.weekday() != Weekday::Sun && holiday_on(holidays, date_str, None).is_none()
    {
        absent_placeholder()
    } else {
        ClassifiedCell::blank()
    }
}
