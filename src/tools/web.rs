use crate::tools::log_message_and_return;
use crate::web::error::WebError;
use crate::web::error::WebError::{
    CantCreateClient, ConnectionFailed, LackOfPermissions, NotFound, WrongCredentials,
};
use reqwest::{Client, StatusCode};

pub fn build_client() -> Result<Client, WebError> {
    reqwest::ClientBuilder::new()
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}

/// Map a backend response status onto the matching [WebError].
pub fn check_status(status: StatusCode) -> Result<(), WebError> {
    if status.is_success() {
        return Ok(());
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(WrongCredentials),
        StatusCode::FORBIDDEN => Err(LackOfPermissions),
        StatusCode::NOT_FOUND => Err(NotFound),
        _ => Err(ConnectionFailed),
    }
}

#[cfg(test)]
mod tests {
    mod check_status {
        use crate::tools::web::check_status;
        use crate::web::error::WebError::{
            ConnectionFailed, LackOfPermissions, NotFound, WrongCredentials,
        };
        use reqwest::StatusCode;

        #[test]
        fn success() {
            assert_eq!(Ok(()), check_status(StatusCode::OK));
            assert_eq!(Ok(()), check_status(StatusCode::NO_CONTENT));
        }

        #[test]
        fn fail_when_error_status() {
            assert_eq!(
                Err(WrongCredentials),
                check_status(StatusCode::UNAUTHORIZED)
            );
            assert_eq!(Err(LackOfPermissions), check_status(StatusCode::FORBIDDEN));
            assert_eq!(Err(NotFound), check_status(StatusCode::NOT_FOUND));
            assert_eq!(
                Err(ConnectionFailed),
                check_status(StatusCode::INTERNAL_SERVER_ERROR)
            );
        }
    }
}
