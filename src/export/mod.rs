//! Spreadsheet export of breakdown and estimate results.
//!
//! Assembly and encoding are kept separate: [`sheet`] turns computed rows
//! into named sheets with their header rows, and [`workbook`] encodes those
//! sheets into the in-memory XLSX artifact handed back to the caller for
//! download. The artifact is never written to the persisted-table path.

pub mod filename;
pub mod sheet;
pub mod workbook;

pub use filename::export_filename;
pub use sheet::{export_sheets, Cell, Sheet, BREAKDOWN_SHEET_NAME, ESTIMATE_SHEET_NAME};
pub use workbook::{export_workbook, write_workbook, ExportError, ExportResult};
