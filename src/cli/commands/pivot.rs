use crate::cli::parser::Commands;
use crate::cli::{load_holidays, load_roster, read_transcript, resolve_period};
use crate::config::Config;
use crate::core::aggregator::merge_events;
use crate::core::parser::parse_transcript;
use crate::core::pivot::build_monthly_pivot;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{hours2readable, pad_left, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pivot {
        file,
        period,
        holidays,
        roster,
        json,
    } = cmd
    {
        let text = read_transcript(file)?;
        let holidays = load_holidays(holidays.as_deref())?;
        let classifier = cfg.classifier()?;

        let records = merge_events(&parse_transcript(&text).events);
        let employees = load_roster(roster.as_deref(), &records)?;
        let (year, month) = resolve_period(period.as_deref(), &records)?;

        let summaries =
            build_monthly_pivot(&records, &holidays, year, month, &employees, &classifier);

        if *json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        header(format!("{:04}-{:02}", year, month));
        println!();

        let name_w = summaries
            .iter()
            .map(|s| s.employee_name.len())
            .max()
            .unwrap_or(8);

        for s in &summaries {
            let row: Vec<&str> = s
                .cells
                .values()
                .map(|c| {
                    let l = c.status.label();
                    if l.is_empty() { "." } else { l }
                })
                .collect();

            println!("{} [{}]", pad_right(&s.employee_name, name_w), row.join(" "));
            println!(
                "  present: {} | late marks: {} | worked: {} day(s) | total {} | avg {}",
                pad_left(&s.present_days.to_string(), 4),
                s.late_mark_count,
                s.days_worked,
                hours2readable(s.total_hours, false),
                hours2readable(s.average_hours, false),
            );
        }
    }
    Ok(())
}
