use crate::errors::AppResult;
use crate::models::summary::MonthlySummary;

/// Write the full summaries (cells included) as pretty JSON.
pub fn write_json(path: &str, summaries: &[MonthlySummary]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(summaries)?;
    std::fs::write(path, json)?;
    Ok(())
}
