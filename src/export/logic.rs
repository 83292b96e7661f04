// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::json::write_json;
use crate::export::{notify_export_success, ExportFormat};
use crate::models::summary::MonthlySummary;
use crate::ui::messages::warning;

use std::io;
use std::path::Path;

/// High-level export flow: overwrite guard, format dispatch, notify.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: "csv" | "json"
    /// - `file`: path of the output file
    /// - `force`: overwrite an existing file
    pub fn export(
        summaries: &[MonthlySummary],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        if summaries.is_empty() {
            warning("No summaries to export for the selected period.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(file, summaries)?,
            ExportFormat::Json => write_json(file, summaries)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}

/// Refuse to clobber an existing file unless forced; create the parent
/// directory when missing.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::from(io::Error::other(format!(
                    "Cannot create output directory {}: {e}",
                    parent.display()
                )))
            })?;
        }
    }

    Ok(())
}
