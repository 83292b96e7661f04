use crate::cli::parser::Commands;
use crate::cli::{load_holidays, read_transcript};
use crate::config::Config;
use crate::core::aggregator::merge_events;
use crate::core::parser::parse_transcript;
use crate::core::pivot::classify_records;
use crate::errors::AppResult;
use crate::models::status::DayStatus;
use crate::ui::messages::info;
use crate::utils::formatting::{bold, hours2readable, pad_right, strip_ansi};
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        file,
        holidays,
        json,
    } = cmd
    {
        let text = read_transcript(file)?;
        let holidays = load_holidays(holidays.as_deref())?;
        let classifier = cfg.classifier()?;

        let records = merge_events(&parse_transcript(&text).events);
        let labeled = classify_records(&records, &holidays, &classifier);

        if *json {
            println!("{}", serde_json::to_string_pretty(&labeled)?);
            return Ok(());
        }

        if labeled.is_empty() {
            info("No attendance records found.");
            return Ok(());
        }

        let name_w = labeled
            .iter()
            .map(|c| c.record.employee_name.len())
            .max()
            .unwrap_or(10);

        for c in &labeled {
            let mut colored = color_for_status(c.cell.status)
                .paint(c.cell.display_text.to_string())
                .to_string();
            // the low-hours absent variant renders bold
            if c.cell.status == DayStatus::AbsentLow {
                colored = bold(&colored);
            }
            let padding = " ".repeat(22usize.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{} | {} | {}{} | in={} out={} | {}",
                c.record.date,
                pad_right(&c.record.employee_name, name_w),
                colored,
                padding,
                c.record.in_time.as_deref().unwrap_or("-"),
                c.record.out_time.as_deref().unwrap_or("-"),
                hours2readable(c.record.work_hours, false),
            );
        }
    }
    Ok(())
}

/// ANSI color per status, aligned with the color keys the cells carry.
fn color_for_status(status: DayStatus) -> Colour {
    match status {
        DayStatus::FullDay => Colour::Green,
        DayStatus::HalfDay => Colour::Yellow,
        DayStatus::LateMark => Colour::RGB(255, 153, 51),
        DayStatus::Absent | DayStatus::AbsentLow => Colour::Red,
        DayStatus::Incomplete => Colour::White,
        DayStatus::SiteVisitPresent | DayStatus::SiteVisitIncomplete => Colour::Blue,
        DayStatus::Holiday => Colour::Purple,
        DayStatus::Blank => Colour::White,
    }
}
