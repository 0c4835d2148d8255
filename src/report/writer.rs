//! Spreadsheet serialization for report tables.
//!
//! The [`SpreadsheetWriter`] trait is the seam between the report pipeline
//! and the file it produces. [`XlsxFileWriter`] writes `.xlsx` workbooks to
//! a directory using `rust_xlsxwriter`.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::aggregate::{Cell, ReportTable};

/// Writes a report table to persistent storage.
pub trait SpreadsheetWriter: Send + Sync {
    /// Writes `table` as a single-sheet workbook named `filename`.
    ///
    /// Returns the location of the written file. An existing file with the
    /// same name is overwritten.
    fn write(&self, filename: &str, table: &ReportTable) -> EngineResult<PathBuf>;
}

/// Writes `.xlsx` workbooks into an output directory.
#[derive(Debug, Clone)]
pub struct XlsxFileWriter {
    output_dir: PathBuf,
}

impl XlsxFileWriter {
    /// Creates a writer targeting `output_dir`. The directory is created on
    /// first write if it does not exist.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders `table` into an in-memory workbook.
    pub fn render(table: &ReportTable) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&table.sheet_name)?;

        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(0x4472C4))
            .set_border(FormatBorder::Thin);
        let hours_format = Format::new().set_num_format("0.00");

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
            let width = (header.len() as f64 + 4.0).max(12.0);
            worksheet.set_column_width(col as u16, width)?;
        }

        for (idx, cells) in table.rows.iter().enumerate() {
            let row = (idx + 1) as u32;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row, col, text)?;
                    }
                    Cell::Number(value) => {
                        let value = value.to_f64().unwrap_or_default();
                        worksheet.write_number_with_format(row, col, value, &hours_format)?;
                    }
                    Cell::Count(count) => {
                        worksheet.write_number(row, col, f64::from(*count))?;
                    }
                }
            }
        }

        if !table.rows.is_empty() && !table.headers.is_empty() {
            let last_row = table.rows.len() as u32;
            let last_col = (table.headers.len() - 1) as u16;
            worksheet.autofilter(0, 0, last_row, last_col)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(workbook)
    }
}

impl SpreadsheetWriter for XlsxFileWriter {
    fn write(&self, filename: &str, table: &ReportTable) -> EngineResult<PathBuf> {
        let failed = |message: String| EngineError::ExportFailed {
            filename: filename.to_string(),
            message,
        };

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            failed(format!(
                "cannot create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let path = self.output_dir.join(filename);
        let mut workbook = Self::render(table).map_err(|e| failed(e.to_string()))?;
        workbook.save(&path).map_err(|e| failed(e.to_string()))?;

        debug!(
            path = %path.display(),
            rows = table.row_count(),
            "Wrote spreadsheet"
        );
        Ok(path)
    }
}
