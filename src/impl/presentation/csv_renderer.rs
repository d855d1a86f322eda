use fractic_server_error::ServerError;

use crate::errors::ExportRenderError;

use super::export_row::{ExportRow, SHEET_HEADERS};

/// Renders rows as CSV with the spreadsheet's headers and cell values.
pub(crate) struct CsvRenderer;

impl CsvRenderer {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn render(&self, rows: &[ExportRow]) -> Result<Vec<u8>, ServerError> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer
            .write_record(SHEET_HEADERS)
            .map_err(|e| ExportRenderError::with_debug("csv", &e))?;
        for row in rows {
            writer
                .write_record(row.cells(""))
                .map_err(|e| ExportRenderError::with_debug("csv", &e))?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportRenderError::with_debug("csv", e.error()))
    }
}
