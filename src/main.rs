mod club;
#[cfg(feature = "demo")]
mod demo_mock_server;
mod error;
mod export;
mod membership;
mod scopes;
mod tools;
mod users;
mod web;

#[macro_use]
extern crate rocket;

use crate::club::config::BackendApiConfig;
use crate::tools::env_args::retrieve_arg_value;
use crate::web::server::build_server;

const BACKEND_HOST_ARG: &str = "--backend-host";
#[cfg(not(feature = "demo"))]
const DEFAULT_BACKEND_HOST: &str = "https://api.nationalquadball.org";

#[launch]
async fn rocket() -> _ {
    env_logger::init();

    #[cfg(feature = "demo")]
    demo_mock_server::init_demo().await;

    build_server(build_backend_api_config())
}

fn build_backend_api_config() -> BackendApiConfig {
    let host = retrieve_arg_value(BACKEND_HOST_ARG).unwrap_or_else(default_backend_host);
    BackendApiConfig::new(host)
}

#[cfg(not(feature = "demo"))]
fn default_backend_host() -> String {
    DEFAULT_BACKEND_HOST.to_owned()
}

#[cfg(feature = "demo")]
fn default_backend_host() -> String {
    demo_mock_server::BACKEND_MOCK_SERVER_URI
        .get()
        .expect("The demo mock server should be started before the API server.")
        .clone()
}
