use crate::club::config::BackendApiConfig;
use crate::error::Result;
use crate::tools::log_message_and_return;
use crate::tools::web::check_status;
use crate::users::credentials::UserCredentials;
use crate::web::error::WebError::{ConnectionFailed, MalformedResponse};
use crate::web::session::UserSession;
use dto::user_profile::UserProfile;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AccessToken {
    access_token: String,
}

/// Log the caller into the league backend, then load their profile.
/// The resulting [UserSession] carries the bearer token and the scopes the
/// backend granted; it is the only thing the server remembers about them.
pub async fn log_in(
    client: &Client,
    config: &BackendApiConfig,
    credentials: &UserCredentials,
) -> Result<UserSession> {
    let url = format!("{}/users/login", config.host());
    let response = client
        .post(&url)
        .json(credentials)
        .send()
        .await
        .map_err(log_message_and_return(
            "Connection to the league backend failed.",
            ConnectionFailed,
        ))?;
    check_status(response.status())?;

    let token = response
        .json::<AccessToken>()
        .await
        .map_err(log_message_and_return(
            "Can't read access token from backend response.",
            MalformedResponse,
        ))?;
    let profile = fetch_profile(client, config, &token.access_token).await?;
    Ok(UserSession::new(
        token.access_token,
        profile.scopes().clone(),
    ))
}

async fn fetch_profile(
    client: &Client,
    config: &BackendApiConfig,
    token: &str,
) -> Result<UserProfile> {
    let url = format!("{}/users/me", config.host());
    let response = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Connection to the league backend failed.",
            ConnectionFailed,
        ))?;
    check_status(response.status())?;

    let profile = response
        .json::<UserProfile>()
        .await
        .map_err(log_message_and_return(
            "Can't read user profile from backend response.",
            MalformedResponse,
        ))?;
    Ok(profile)
}
