use fractic_server_error::ServerError;
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::errors::ExportRenderError;

use super::export_row::{ExportRow, SHEET_HEADERS};

const SHEET_NAME: &str = "Estoque";
const COLUMN_WIDTHS: [f64; 7] = [10.0, 30.0, 20.0, 20.0, 15.0, 15.0, 50.0];

/// Renders rows as a single-sheet xlsx workbook.
pub(crate) struct SpreadsheetRenderer;

impl SpreadsheetRenderer {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn render(&self, rows: &[ExportRow]) -> Result<Vec<u8>, ServerError> {
        self.build(rows)
            .map_err(|e| ExportRenderError::with_debug("spreadsheet", &e))
    }

    fn build(&self, rows: &[ExportRow]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(SHEET_NAME)?;
            for (col, (header, width)) in SHEET_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
                worksheet.write_string(0, col as u16, *header)?;
                worksheet.set_column_width(col as u16, width)?;
            }
            for (i, row) in rows.iter().enumerate() {
                let r = (i + 1) as u32;
                worksheet.write_string(r, 0, row.type_label)?;
                worksheet.write_string(r, 1, &row.product_name)?;
                worksheet.write_string(r, 2, &row.location)?;
                worksheet.write_string(r, 3, &row.category)?;
                worksheet.write_number(r, 4, row.quantity as f64)?;
                worksheet.write_string(r, 5, &row.date)?;
                worksheet.write_string(r, 6, row.notes.as_deref().unwrap_or(""))?;
            }
        }
        workbook.save_to_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_zip_container() {
        let rows = vec![ExportRow {
            type_label: "Entrada",
            product_name: "Parafuso".to_string(),
            location: "Depósito".to_string(),
            category: "Ferragens".to_string(),
            quantity: 5,
            date: "01/01/2024".to_string(),
            notes: None,
        }];
        let bytes = SpreadsheetRenderer::new().render(&rows).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_renders_header_only_sheet() {
        let bytes = SpreadsheetRenderer::new().render(&[]).unwrap();
        assert!(!bytes.is_empty());
    }
}
