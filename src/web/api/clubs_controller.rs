use crate::club::cache::ClubRosterCache;
use crate::club::config::BackendApiConfig;
use crate::club::download::{assign_club_manager, fetch_club_aggregate, remove_club_member};
use crate::club::error::ClubError;
use crate::error::ApplicationError;
use crate::export::{export_filename, write_members_csv};
use crate::membership::classify::group_by_active;
use crate::membership::filter::{MemberFilter, count_members, select_view};
use crate::membership::selection::MemberView;
use crate::scopes::{CLUB_MEMBER_MANAGEMENT, has_scope};
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::error::WebError;
use crate::web::session::UserSession;
use chrono::Utc;
use dto::club::ManagerAssignment;
use dto::club_members::ClubAggregate;
use rocket::http::{Header, Status};
use rocket::serde::json::{Json, json};
use rocket::{Responder, State};
use std::sync::Mutex;

/// List a club's members, grouped counters included.
/// The optional `filter` selects a subset of the already-classified list;
/// it defaults to `all`.
#[get("/clubs/<club_uuid>/members?<filter>")]
pub async fn get_club_members(
    config: &State<BackendApiConfig>,
    roster_cache: &State<Mutex<ClubRosterCache>>,
    session: UserSession,
    club_uuid: &str,
    filter: Option<MemberFilter>,
) -> Result<String, Status> {
    let aggregate = load_club_aggregate(config, roster_cache, &session, club_uuid).await?;

    let all_members = aggregate.members().all_members();
    let classified = group_by_active(&all_members);
    let members = select_view(&all_members, &classified, filter.unwrap_or_default());
    Ok(json!({
        "club": aggregate.club(),
        "counts": count_members(&classified),
        "members": members,
    })
    .to_string())
}

/// Detail view of a single club member, as shown in the selection panel.
#[get("/clubs/<club_uuid>/members/<member_uuid>", rank = 2)]
pub async fn get_club_member(
    config: &State<BackendApiConfig>,
    roster_cache: &State<Mutex<ClubRosterCache>>,
    session: UserSession,
    club_uuid: &str,
    member_uuid: &str,
) -> Result<String, Status> {
    let aggregate = load_club_aggregate(config, roster_cache, &session, club_uuid).await?;

    let members = aggregate.members().all_members();
    let member = members
        .iter()
        .find(|member| member.uuid() == member_uuid)
        .ok_or(Status::NotFound)?;
    Ok(json!(MemberView::from(member)).to_string())
}

#[derive(Responder)]
#[response(content_type = "text/csv")]
pub struct CsvExport {
    content: Vec<u8>,
    disposition: Header<'static>,
}

impl CsvExport {
    fn new(content: Vec<u8>, filename: String) -> Self {
        let disposition = Header::new(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        );
        Self {
            content,
            disposition,
        }
    }
}

/// Browser-facing CSV download: a header row, then regular members,
/// then summer pass members.
#[get("/clubs/<club_uuid>/members/csv")]
pub async fn download_members_csv(
    config: &State<BackendApiConfig>,
    roster_cache: &State<Mutex<ClubRosterCache>>,
    session: UserSession,
    club_uuid: &str,
) -> Result<CsvExport, Status> {
    let aggregate = load_club_aggregate(config, roster_cache, &session, club_uuid).await?;

    let members = aggregate.members();
    let content = write_members_csv(members.members(), members.student_summer_pass_members())
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let filename = export_filename(aggregate.club().name(), Utc::now().date_naive());
    Ok(CsvExport::new(content, filename))
}

/// Remove a member from a club, then invalidate the cached roster so the
/// next read sees the mutation.
#[delete("/clubs/<club_uuid>/members/<member_uuid>")]
pub async fn remove_member(
    config: &State<BackendApiConfig>,
    roster_cache: &State<Mutex<ClubRosterCache>>,
    session: UserSession,
    club_uuid: &str,
    member_uuid: &str,
) -> Result<Status, Status> {
    if !has_scope(&CLUB_MEMBER_MANAGEMENT, session.scopes()) {
        return Err(Status::Forbidden);
    }

    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    remove_club_member(&client, config.inner(), session.token(), club_uuid, member_uuid)
        .await
        .map_err(to_status)?;
    invalidate_club_roster(roster_cache, club_uuid)?;
    Ok(Status::NoContent)
}

/// Assign or update the club manager, then invalidate the cached roster.
#[put(
    "/clubs/<club_uuid>/manager",
    format = "application/json",
    data = "<assignment>"
)]
pub async fn assign_manager(
    config: &State<BackendApiConfig>,
    roster_cache: &State<Mutex<ClubRosterCache>>,
    session: UserSession,
    club_uuid: &str,
    assignment: Json<ManagerAssignment>,
) -> Result<Status, Status> {
    if !has_scope(&CLUB_MEMBER_MANAGEMENT, session.scopes()) {
        return Err(Status::Forbidden);
    }

    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    assign_club_manager(
        &client,
        config.inner(),
        session.token(),
        club_uuid,
        &assignment.into_inner(),
    )
    .await
    .map_err(to_status)?;
    invalidate_club_roster(roster_cache, club_uuid)?;
    Ok(Status::NoContent)
}

/// Read-through load: serve the cached aggregate when fresh, otherwise fetch
/// the club and its member list from the backend and cache them as one unit.
async fn load_club_aggregate(
    config: &State<BackendApiConfig>,
    roster_cache: &State<Mutex<ClubRosterCache>>,
    session: &UserSession,
    club_uuid: &str,
) -> Result<ClubAggregate, Status> {
    {
        let mut cache = roster_cache
            .lock()
            .map_err(log_error_and_return(Status::InternalServerError))?;
        if let Some(aggregate) = cache.get(club_uuid) {
            return Ok(aggregate.clone());
        }
    }

    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    let aggregate = fetch_club_aggregate(&client, config.inner(), session.token(), club_uuid)
        .await
        .map_err(to_status)?;

    let mut cache = roster_cache
        .lock()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    cache.store(club_uuid.to_owned(), aggregate.clone());
    Ok(aggregate)
}

fn invalidate_club_roster(
    roster_cache: &State<Mutex<ClubRosterCache>>,
    club_uuid: &str,
) -> Result<(), Status> {
    let mut cache = roster_cache
        .lock()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    cache.invalidate(club_uuid);
    Ok(())
}

fn to_status(error: ApplicationError) -> Status {
    match error {
        ApplicationError::Club(ClubError::MissingClubIdentifier) => Status::BadRequest,
        ApplicationError::Web(WebError::WrongCredentials) => Status::Unauthorized,
        ApplicationError::Web(WebError::LackOfPermissions) => Status::Forbidden,
        ApplicationError::Web(WebError::NotFound) => Status::NotFound,
        _ => Status::BadGateway,
    }
}
