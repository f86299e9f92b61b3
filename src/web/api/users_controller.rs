use crate::club::config::BackendApiConfig;
use crate::error::ApplicationError;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::users::credentials::UserCredentials;
use crate::users::login::log_in;
use crate::web::authentication::SESSION_COOKIE;
use crate::web::error::WebError;
use crate::web::session::SessionStorage;
use rocket::State;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::serde::json::Json;
use rocket::time::Duration;
use std::sync::Mutex;
use uuid::Uuid;

/// Try and log a user onto the league backend.
/// If the login operation succeeds, then a new UUID is created and the
/// session (token + scopes) is stored with this UUID. The UUID is returned
/// to the caller through a private cookie, so that it is their access token.
#[post("/users/login", format = "application/json", data = "<credentials>")]
pub async fn login(
    config: &State<BackendApiConfig>,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    credentials: Json<UserCredentials>,
) -> Result<(Status, ()), Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    match log_in(&client, config.inner(), &credentials.into_inner()).await {
        Ok(session) => {
            let mut mutex = session_storage
                .lock()
                .map_err(log_error_and_return(Status::InternalServerError))?;
            let uuid = Uuid::new_v4().to_string();
            let cookie = Cookie::build((SESSION_COOKIE.to_owned(), uuid.clone()))
                .max_age(Duration::days(1))
                .build();
            cookie_jar.add_private(cookie);
            (*mutex).store(uuid, session);
            Ok((Status::Ok, ()))
        }
        Err(ApplicationError::Web(WebError::WrongCredentials)) => Err(Status::Unauthorized),
        Err(ApplicationError::Web(WebError::LackOfPermissions)) => Err(Status::Forbidden),
        Err(_) => Err(Status::BadGateway),
    }
}

#[cfg(test)]
mod tests {
    mod login {
        use crate::club::config::BackendApiConfig;
        use crate::users::credentials::UserCredentials;
        use crate::web::api::users_controller::login;
        use crate::web::authentication::SESSION_COOKIE;
        use crate::web::session::SessionStorage;
        use dto::scope::Scope::Emt;
        use dto::user_profile::UserProfile;
        use reqwest::header::CONTENT_TYPE;
        use rocket::http::{ContentType, Header, Status};
        use rocket::local::asynchronous::Client;
        use rocket::serde::json::json;
        use rocket::tokio::runtime::Runtime;
        use std::sync::Mutex;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        async fn setup_backend_login(mock_server: &MockServer) {
            Mock::given(method("POST"))
                .and(path("/users/login"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({"access_token": "token"})),
                )
                .mount(mock_server)
                .await;
            Mock::given(method("GET"))
                .and(path("/users/me"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(UserProfile::new_test(vec![Emt])),
                )
                .mount(mock_server)
                .await;
        }

        #[test]
        fn success() {
            async fn test() {
                let mock_server = MockServer::start().await;
                setup_backend_login(&mock_server).await;

                let config = BackendApiConfig::new(mock_server.uri());
                let session_storage = Mutex::new(SessionStorage::default());
                let rocket = rocket::build()
                    .manage(config)
                    .manage(session_storage)
                    .mount("/", routes![login]);
                let client = Client::tracked(rocket).await.unwrap();

                let credentials =
                    UserCredentials::new("alex.beater@club.test".to_owned(), "s3cret".to_owned());
                let request = client
                    .post("/users/login")
                    .body(json!(credentials).to_string().as_bytes())
                    .header(Header::new(
                        CONTENT_TYPE.to_string(),
                        ContentType::JSON.to_string(),
                    ));

                let response = request.dispatch().await;
                assert_eq!(Status::Ok, response.status());
                assert!(response.cookies().get_private(SESSION_COOKIE).is_some());
            }
            Runtime::new().unwrap().block_on(test());
        }

        #[test]
        fn fail_when_unauthorized() {
            async fn test() {
                let mock_server = MockServer::start().await;
                Mock::given(method("POST"))
                    .and(path("/users/login"))
                    .respond_with(ResponseTemplate::new(401))
                    .mount(&mock_server)
                    .await;

                let config = BackendApiConfig::new(mock_server.uri());
                let session_storage = Mutex::new(SessionStorage::default());
                let rocket = rocket::build()
                    .manage(config)
                    .manage(session_storage)
                    .mount("/", routes![login]);
                let client = Client::tracked(rocket).await.unwrap();

                let credentials =
                    UserCredentials::new("alex.beater@club.test".to_owned(), "wrong".to_owned());
                let request = client
                    .post("/users/login")
                    .body(json!(credentials).to_string().as_bytes())
                    .header(Header::new(
                        CONTENT_TYPE.to_string(),
                        ContentType::JSON.to_string(),
                    ));

                let response = request.dispatch().await;
                assert_eq!(Status::Unauthorized, response.status());
                assert!(response.cookies().get_private(SESSION_COOKIE).is_none());
            }
            Runtime::new().unwrap().block_on(test());
        }

        #[test]
        fn fail_when_backend_is_down() {
            async fn test() {
                let mock_server = MockServer::start().await;
                Mock::given(method("POST"))
                    .and(path("/users/login"))
                    .respond_with(ResponseTemplate::new(500))
                    .mount(&mock_server)
                    .await;

                let config = BackendApiConfig::new(mock_server.uri());
                let session_storage = Mutex::new(SessionStorage::default());
                let rocket = rocket::build()
                    .manage(config)
                    .manage(session_storage)
                    .mount("/", routes![login]);
                let client = Client::tracked(rocket).await.unwrap();

                let credentials =
                    UserCredentials::new("alex.beater@club.test".to_owned(), "s3cret".to_owned());
                let request = client
                    .post("/users/login")
                    .body(json!(credentials).to_string().as_bytes())
                    .header(Header::new(
                        CONTENT_TYPE.to_string(),
                        ContentType::JSON.to_string(),
                    ));

                let response = request.dispatch().await;
                assert_eq!(Status::BadGateway, response.status());
            }
            Runtime::new().unwrap().block_on(test());
        }
    }
}
