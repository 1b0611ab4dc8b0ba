use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::records_from_lines;
use crate::export::notify_export_success;
use crate::store::ResponseLog;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export flow: structured CSV/JSON of the parsed responses,
/// in chronological order.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        store: &ResponseLog,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let lines = store.read_chronological()?;
        let records = records_from_lines(&lines);

        if records.is_empty() {
            warning("No responses to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                write_csv(path, &records)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(path, &records)?;
                notify_export_success("JSON", path);
            }
        }

        Ok(())
    }
}
