use dto::club::Club;
use dto::club_members::ClubMembersResponse;
use dto::member::Member;
use dto::product::{Product, ProductAssignment};
use dto::scope::Scope::{ClubManagement, Emt};
use dto::user_profile::UserProfile;
use rocket::serde::json::json;
use std::sync::OnceLock;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub static BACKEND_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();
// Keep the server alive for the whole app lifetime: dropping it would stop it.
static BACKEND_MOCK_SERVER: OnceLock<MockServer> = OnceLock::new();

const DEMO_CLUB_UUID: &str = "demo-club";

/// Start a mock of the league backend so that the whole app can be tried out
/// without credentials: any login succeeds and a demo club roster is served.
pub async fn init_demo() {
    let mock_server = MockServer::start().await;
    BACKEND_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());

    mock_login(&mock_server).await;
    mock_user_profile(&mock_server).await;
    mock_club(&mock_server).await;
    mock_club_members(&mock_server).await;
    mock_member_management(&mock_server).await;

    let _ = BACKEND_MOCK_SERVER.set(mock_server);
}

async fn mock_login(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "demo-token"})),
        )
        .mount(mock_server)
        .await;
}

async fn mock_user_profile(mock_server: &MockServer) {
    let profile = UserProfile::new(
        "demo-admin".to_owned(),
        "Demo".to_owned(),
        "Admin".to_owned(),
        "demo.admin@club.test".to_owned(),
        vec![Emt, ClubManagement],
    );
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile))
        .mount(mock_server)
        .await;
}

async fn mock_club(mock_server: &MockServer) {
    let club = Club::new(
        DEMO_CLUB_UUID.to_owned(),
        "Demo City Dragons".to_owned(),
        Some("member-jane".to_owned()),
    );
    Mock::given(method("GET"))
        .and(path(format!("/clubs/{DEMO_CLUB_UUID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(club))
        .mount(mock_server)
        .await;
}

async fn mock_club_members(mock_server: &MockServer) {
    let members = ClubMembersResponse::new(
        vec![
            demo_member("member-jane", "Jane", "Keeper", false, Some("31-12-2999")),
            demo_member("member-jon", "Jon", "Seeker", false, Some("01-01-2020")),
            demo_member("member-robin", "Robin", "Chaser", false, None),
        ],
        vec![demo_member(
            "member-noa",
            "Noa",
            "Swift",
            true,
            Some("31-12-2999"),
        )],
    );
    Mock::given(method("GET"))
        .and(path(format!("/clubs/{DEMO_CLUB_UUID}/members")))
        .respond_with(ResponseTemplate::new(200).set_body_json(members))
        .mount(mock_server)
        .await;
}

async fn mock_member_management(mock_server: &MockServer) {
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/clubs/[^/]+/members/[^/]+$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/clubs/[^/]+/manager$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(mock_server)
        .await;
}

fn demo_member(
    uuid: &str,
    first_name: &str,
    last_name: &str,
    is_student: bool,
    expires: Option<&str>,
) -> Member {
    let stripe_products = expires
        .map(|expires| {
            vec![ProductAssignment::new(Some(Product::new(
                "Full Membership".to_owned(),
                Some(expires.to_owned()),
            )))]
        })
        .unwrap_or_default();
    Member::new(
        uuid.to_owned(),
        first_name.to_owned(),
        last_name.to_owned(),
        format!("{first_name}.{last_name}@club.test").to_lowercase(),
        None,
        is_student,
        is_student.then(|| "Demo City University".to_owned()),
        stripe_products,
    )
}
