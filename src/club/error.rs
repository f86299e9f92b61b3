use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClubError {
    #[error("A club identifier is required before its members can be fetched.")]
    MissingClubIdentifier,
}
