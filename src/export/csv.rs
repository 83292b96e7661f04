use super::model::SummaryExport;
use crate::errors::AppResult;
use crate::models::summary::MonthlySummary;
use csv::Writer;

/// Write the monthly summaries as flat CSV rows.
pub fn write_csv(path: &str, summaries: &[MonthlySummary]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for s in summaries {
        wtr.serialize(SummaryExport::from(s))?;
    }

    wtr.flush()?;
    Ok(())
}
