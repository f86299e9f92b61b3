use crate::club::error::ClubError;
use crate::export::error::ExportError;
use crate::web::error::WebError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has been encountered while executing requests onto the league backend.")]
    Web(#[from] WebError),
    #[error("Error while working with a club roster.")]
    Club(#[from] ClubError),
    #[error("Error while generating a members export.")]
    Export(#[from] ExportError),
}
