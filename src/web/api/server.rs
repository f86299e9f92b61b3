use crate::club::cache::ClubRosterCache;
use crate::club::config::BackendApiConfig;
use crate::web::api::clubs_controller;
use crate::web::api::users_controller;
use crate::web::session::SessionStorage;
use rocket::{Build, Rocket};
use std::sync::Mutex;

pub fn initialize_managed_states(
    rocket_build: Rocket<Build>,
    config: BackendApiConfig,
) -> Rocket<Build> {
    rocket_build
        .manage(config)
        .manage(Mutex::new(SessionStorage::default()))
        .manage(Mutex::new(ClubRosterCache::default()))
}

pub fn mount_api_routes(rocket_build: Rocket<Build>) -> Rocket<Build> {
    rocket_build.mount(
        "/api",
        routes![
            users_controller::login,
            clubs_controller::get_club_members,
            clubs_controller::get_club_member,
            clubs_controller::download_members_csv,
            clubs_controller::remove_member,
            clubs_controller::assign_manager,
        ],
    )
}
