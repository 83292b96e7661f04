use crate::cli::parser::Commands;
use crate::cli::{load_holidays, load_roster, read_transcript, resolve_period};
use crate::config::Config;
use crate::core::aggregator::merge_events;
use crate::core::parser::parse_transcript;
use crate::core::pivot::build_monthly_pivot;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        period,
        holidays,
        roster,
        force,
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

        ExportLogic::export(&summaries, format.clone(), out, *force)?;
    }
    Ok(())
}
