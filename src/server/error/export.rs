use thiserror::Error;

/// Failures while rendering spreadsheets or PDF receipts.
///
/// Both variants surface as 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to build spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to build PDF: {0}")]
    Pdf(#[from] printpdf::Error),
}
