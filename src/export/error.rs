use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("A CSV row couldn't be written.")]
    CsvRowWriteFailed(#[from] csv::Error),
    #[error("The CSV buffer couldn't be finalized.")]
    CsvFinalizationFailed,
}
