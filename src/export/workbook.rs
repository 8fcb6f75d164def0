use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;
use tracing::debug;

use crate::estimate::{BreakdownRow, Estimate};
use crate::export::sheet::{export_sheets, Cell, Sheet};

/// Errors that can occur while encoding the export artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Spreadsheet encoding failed.
    #[error("workbook error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Encode assembled sheets into an in-memory XLSX document.
pub fn write_workbook(sheets: &[Sheet]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, title) in sheet.columns.iter().enumerate() {
            worksheet.write_string(0, col as u16, *title)?;
        }
        for (row_index, row) in sheet.rows.iter().enumerate() {
            let row_number = (row_index + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row_number, col as u16, text.as_str())?;
                    }
                    Cell::Number(number) => {
                        worksheet.write_number(row_number, col as u16, *number)?;
                    }
                }
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(sheets = sheets.len(), bytes = bytes.len(), "encoded workbook");
    Ok(bytes)
}

/// Assemble and encode the full export artifact in one step.
pub fn export_workbook(
    breakdown: &[BreakdownRow],
    estimate: Option<&Estimate>,
) -> ExportResult<Vec<u8>> {
    write_workbook(&export_sheets(breakdown, estimate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;

    #[test]
    fn test_workbook_bytes_are_a_zip_container() {
        let rows = vec![BreakdownRow {
            resource: "SME".to_string(),
            internal_cost: 100.0,
            units: 3,
            total_internal: 300.0,
            billing_price: 150.0,
        }];
        let estimate = Estimate {
            resource: "SME".to_string(),
            category: Category::CourseCreation,
            units: 3,
            billing_rate: 150.0,
            total: 450.0,
        };

        let bytes = export_workbook(&rows, Some(&estimate)).expect("encode");
        // XLSX is a zip archive; check the container magic.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_breakdown_still_encodes() {
        let bytes = export_workbook(&[], None).expect("encode");
        assert!(!bytes.is_empty());
    }
}
