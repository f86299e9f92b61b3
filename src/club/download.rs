use crate::club::config::BackendApiConfig;
use crate::club::error::ClubError::MissingClubIdentifier;
use crate::error::{ApplicationError, Result};
use crate::tools::log_message_and_return;
use crate::tools::web::check_status;
use crate::web::error::WebError::{ConnectionFailed, MalformedResponse};
use dto::club::{Club, ManagerAssignment};
use dto::club_members::{ClubAggregate, ClubMembersResponse};
use log::debug;
use reqwest::{Client, Response};

/// Fetch a club and both of its member populations from the league backend.
/// No request is issued until a non-empty club identifier is available.
pub async fn fetch_club_aggregate(
    client: &Client,
    config: &BackendApiConfig,
    token: &str,
    club_uuid: &str,
) -> Result<ClubAggregate> {
    require_club_identifier(club_uuid)?;

    let club = fetch_club(client, config.host(), token, club_uuid).await?;
    let members = fetch_club_members(client, config.host(), token, club_uuid).await?;
    debug!(
        "Fetched club roster [club: {club_uuid}, members: {}, summer pass members: {}]",
        members.members().len(),
        members.student_summer_pass_members().len()
    );
    Ok(ClubAggregate::new(club, members))
}

/// Remove a member from a club.
/// The caller owns the follow-up roster cache invalidation.
pub async fn remove_club_member(
    client: &Client,
    config: &BackendApiConfig,
    token: &str,
    club_uuid: &str,
    member_uuid: &str,
) -> Result<()> {
    require_club_identifier(club_uuid)?;

    let url = format!("{}/clubs/{club_uuid}/members/{member_uuid}", config.host());
    let response = client
        .delete(&url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't remove club member.",
            ConnectionFailed,
        ))?;
    check_status(response.status())?;
    Ok(())
}

/// Assign or update a club's manager.
/// The caller owns the follow-up roster cache invalidation.
pub async fn assign_club_manager(
    client: &Client,
    config: &BackendApiConfig,
    token: &str,
    club_uuid: &str,
    assignment: &ManagerAssignment,
) -> Result<()> {
    require_club_identifier(club_uuid)?;

    let url = format!("{}/clubs/{club_uuid}/manager", config.host());
    let response = client
        .put(&url)
        .bearer_auth(token)
        .json(assignment)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't assign club manager.",
            ConnectionFailed,
        ))?;
    check_status(response.status())?;
    Ok(())
}

fn require_club_identifier(club_uuid: &str) -> Result<()> {
    if club_uuid.trim().is_empty() {
        Err(ApplicationError::from(MissingClubIdentifier))
    } else {
        Ok(())
    }
}

async fn fetch_club(client: &Client, host: &str, token: &str, club_uuid: &str) -> Result<Club> {
    let url = format!("{host}/clubs/{club_uuid}");
    let response = get(client, &url, token).await?;
    let club = response.json::<Club>().await.map_err(log_message_and_return(
        "Can't read club from backend response.",
        MalformedResponse,
    ))?;
    Ok(club)
}

async fn fetch_club_members(
    client: &Client,
    host: &str,
    token: &str,
    club_uuid: &str,
) -> Result<ClubMembersResponse> {
    let url = format!("{host}/clubs/{club_uuid}/members");
    let response = get(client, &url, token).await?;
    let members = response
        .json::<ClubMembersResponse>()
        .await
        .map_err(log_message_and_return(
            "Can't read club members from backend response.",
            MalformedResponse,
        ))?;
    Ok(members)
}

async fn get(client: &Client, url: &str, token: &str) -> Result<Response> {
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Connection to the league backend failed.",
            ConnectionFailed,
        ))?;
    check_status(response.status())?;
    Ok(response)
}
