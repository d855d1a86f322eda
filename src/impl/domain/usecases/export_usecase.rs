use chrono::NaiveDateTime;
use fractic_server_error::ServerError;

use crate::{
    entities::{ExportFormat, ExportedFile, InventoryTransaction},
    presentation::{
        csv_renderer::CsvRenderer,
        document_renderer::DocumentRenderer,
        export_row::export_rows,
        spreadsheet_renderer::SpreadsheetRenderer,
    },
};

pub(crate) const DEFAULT_EXPORT_FILE_NAME: &str = "relatorio_estoque";

/// Turns a visible set into a downloadable file. Never touches stored state.
pub(crate) struct ExportUsecase {
    spreadsheet_renderer: SpreadsheetRenderer,
    document_renderer: DocumentRenderer,
    csv_renderer: CsvRenderer,
}

impl ExportUsecase {
    pub(crate) fn new() -> Self {
        Self {
            spreadsheet_renderer: SpreadsheetRenderer::new(),
            document_renderer: DocumentRenderer::new(),
            csv_renderer: CsvRenderer::new(),
        }
    }

    pub(crate) fn export(
        &self,
        visible: &[InventoryTransaction],
        format: ExportFormat,
        file_name: &str,
        title: &str,
        generated_at: NaiveDateTime,
    ) -> Result<ExportedFile, ServerError> {
        let rows = export_rows(visible);
        let bytes = match format {
            ExportFormat::Spreadsheet => self.spreadsheet_renderer.render(&rows)?,
            ExportFormat::Document => self.document_renderer.render(title, generated_at, &rows)?,
            ExportFormat::Csv => self.csv_renderer.render(&rows)?,
        };
        let file_name = format!("{}.{}", sanitize_file_name(file_name), format.extension());
        log::info!("exported {} rows to {}", rows.len(), file_name);
        Ok(ExportedFile {
            file_name,
            format,
            bytes,
        })
    }
}

/// Keeps the base name a single plain path component.
pub(crate) fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        DEFAULT_EXPORT_FILE_NAME.to_string()
    } else {
        cleaned
    }
}
