use chrono::NaiveDateTime;
use fractic_server_error::ServerError;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PaintMode, PdfDocument, PdfLayerReference, Rect, Rgb,
};

use crate::errors::ExportRenderError;

use super::export_row::ExportRow;

// A4 portrait, all lengths in millimetres measured from the top-left corner.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 14.0;
const TITLE_Y: f32 = 16.0;
const TIMESTAMP_Y: f32 = 22.0;
const FIRST_PAGE_TABLE_Y: f32 = 30.0;

const TABLE_HEADERS: [&str; 7] = [
    "Tipo",
    "Produto",
    "Local",
    "Categoria",
    "Qtd.",
    "Data",
    "Observações",
];
// The notes column is kept wide so free text is not squeezed.
const COLUMN_WIDTHS: [f32; 7] = [18.0, 36.0, 24.0, 24.0, 12.0, 18.0, 50.0];

const TITLE_FONT_SIZE: f32 = 16.0;
const TIMESTAMP_FONT_SIZE: f32 = 10.0;
const CELL_FONT_SIZE: f32 = 8.0;
const LINE_HEIGHT: f32 = 3.6;
const CELL_PADDING: f32 = 1.6;
const PT_TO_MM: f32 = 0.3528;
// Average Helvetica glyph width relative to the font size.
const AVG_GLYPH_WIDTH_EM: f32 = 0.5;

const HEADER_FILL: (f32, f32, f32) = (22.0 / 255.0, 160.0 / 255.0, 133.0 / 255.0);
const GRID_GRAY: f32 = 0.78;

/// One table row after wrapping, placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlacedRow {
    pub top: f32,
    pub height: f32,
    /// Wrapped lines per column.
    pub cells: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageLayout {
    pub header: PlacedRow,
    pub rows: Vec<PlacedRow>,
}

/// Renders rows as a paginated pdf report with a title, a generation
/// timestamp and a grid table whose header repeats on every page.
pub(crate) struct DocumentRenderer;

impl DocumentRenderer {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn render(
        &self,
        title: &str,
        generated_at: NaiveDateTime,
        rows: &[ExportRow],
    ) -> Result<Vec<u8>, ServerError> {
        let pages = self.layout(rows);

        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportRenderError::with_debug("document", &e))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportRenderError::with_debug("document", &e))?;

        for (i, page) in pages.iter().enumerate() {
            let layer = if i == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (p, l) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                doc.get_page(p).get_layer(l)
            };
            if i == 0 {
                set_fill(&layer, (0.0, 0.0, 0.0));
                layer.use_text(title, TITLE_FONT_SIZE, Mm(MARGIN), pdf_y(TITLE_Y), &regular);
                layer.use_text(
                    format!("Gerado em: {}", generated_at.format("%d/%m/%Y, %H:%M:%S")),
                    TIMESTAMP_FONT_SIZE,
                    Mm(MARGIN),
                    pdf_y(TIMESTAMP_Y),
                    &regular,
                );
            }
            draw_row(&layer, &page.header, &bold, Some(HEADER_FILL), (1.0, 1.0, 1.0));
            for row in &page.rows {
                draw_row(&layer, row, &regular, None, (0.0, 0.0, 0.0));
            }
        }

        doc.save_to_bytes()
            .map_err(|e| ExportRenderError::with_debug("document", &e))
    }

    /// Wraps cell text and splits the table into pages. A row too tall for
    /// the space left is moved to the next page, or split line by line when
    /// it would not fit on a fresh page either.
    pub(crate) fn layout(&self, rows: &[ExportRow]) -> Vec<PageLayout> {
        let bottom = PAGE_HEIGHT - MARGIN;
        let header_cells: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
        let fresh_page_space = bottom - MARGIN - row_height(&wrap_cells(&header_cells));

        let mut pages = vec![];
        let mut current = new_page(&header_cells, FIRST_PAGE_TABLE_Y);
        let mut cursor = current.header.top + current.header.height;
        for row in rows {
            let mut cells = wrap_cells(&row.cells("-"));
            loop {
                let height = row_height(&cells);
                if cursor + height <= bottom {
                    current.rows.push(PlacedRow {
                        top: cursor,
                        height,
                        cells,
                    });
                    cursor += height;
                    break;
                }

                let fit_here = lines_fitting(bottom - cursor);
                if !current.rows.is_empty() && (fit_here == 0 || height <= fresh_page_space) {
                    pages.push(std::mem::replace(
                        &mut current,
                        new_page(&header_cells, MARGIN),
                    ));
                    cursor = current.header.top + current.header.height;
                    continue;
                }

                let (head, tail) = split_cells(cells, fit_here.max(1));
                let height = row_height(&head);
                current.rows.push(PlacedRow {
                    top: cursor,
                    height,
                    cells: head,
                });
                pages.push(std::mem::replace(
                    &mut current,
                    new_page(&header_cells, MARGIN),
                ));
                cursor = current.header.top + current.header.height;
                cells = tail;
            }
        }
        pages.push(current);
        pages
    }
}

fn new_page(header_cells: &[String], top: f32) -> PageLayout {
    let cells = wrap_cells(header_cells);
    let height = row_height(&cells);
    PageLayout {
        header: PlacedRow { top, height, cells },
        rows: vec![],
    }
}

fn wrap_cells(cells: &[String]) -> Vec<Vec<String>> {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(text, width)| {
            let char_width = CELL_FONT_SIZE * PT_TO_MM * AVG_GLYPH_WIDTH_EM;
            let max_chars = (((width - 2.0 * CELL_PADDING) / char_width) as usize).max(1);
            let lines: Vec<String> = textwrap::wrap(text, max_chars)
                .into_iter()
                .map(|l| l.into_owned())
                .collect();
            if lines.is_empty() {
                vec![String::new()]
            } else {
                lines
            }
        })
        .collect()
}

fn row_height(cells: &[Vec<String>]) -> f32 {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    lines as f32 * LINE_HEIGHT + 2.0 * CELL_PADDING
}

/// Number of text lines a row fragment can hold in `space` millimetres.
fn lines_fitting(space: f32) -> usize {
    let usable = space - 2.0 * CELL_PADDING - 1e-3;
    if usable <= 0.0 {
        0
    } else {
        (usable / LINE_HEIGHT) as usize
    }
}

/// Splits every column after its first `lines` lines. Columns shorter than
/// that leave an empty continuation.
fn split_cells(cells: Vec<Vec<String>>, lines: usize) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
    cells
        .into_iter()
        .map(|mut column| {
            let tail = column.split_off(lines.min(column.len()));
            (column, tail)
        })
        .unzip()
}

fn pdf_y(top: f32) -> Mm {
    Mm(PAGE_HEIGHT - top)
}

fn set_fill(layer: &PdfLayerReference, (r, g, b): (f32, f32, f32)) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

fn draw_row(
    layer: &PdfLayerReference,
    row: &PlacedRow,
    font: &IndirectFontRef,
    fill: Option<(f32, f32, f32)>,
    text_color: (f32, f32, f32),
) {
    layer.set_outline_color(Color::Rgb(Rgb::new(GRID_GRAY, GRID_GRAY, GRID_GRAY, None)));
    layer.set_outline_thickness(0.3);

    let ascent = CELL_FONT_SIZE * PT_TO_MM * 0.75;
    let mut left = MARGIN;
    for (lines, width) in row.cells.iter().zip(COLUMN_WIDTHS) {
        let rect = Rect::new(
            Mm(left),
            pdf_y(row.top + row.height),
            Mm(left + width),
            pdf_y(row.top),
        );
        match fill {
            Some(color) => {
                set_fill(layer, color);
                layer.add_rect(rect.with_mode(PaintMode::FillStroke));
            }
            None => layer.add_rect(rect.with_mode(PaintMode::Stroke)),
        }

        set_fill(layer, text_color);
        for (i, line) in lines.iter().enumerate() {
            let baseline = row.top + CELL_PADDING + i as f32 * LINE_HEIGHT + ascent;
            layer.use_text(
                line.as_str(),
                CELL_FONT_SIZE,
                Mm(left + CELL_PADDING),
                pdf_y(baseline),
                font,
            );
        }
        left += width;
    }
}
