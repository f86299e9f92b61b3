use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("The credentials that have been passed seem to not match any known credentials.")]
    WrongCredentials,
    #[error("The connection to the league backend failed.")]
    ConnectionFailed,
    #[error(
        "Although the credentials are OK, the user doesn't have permissions to execute the operation."
    )]
    LackOfPermissions,
    #[error("The requested resource has not been found.")]
    NotFound,
    #[error("The league backend's response couldn't be understood.")]
    MalformedResponse,
}
