pub(crate) mod clubs_controller;
pub(crate) mod server;
pub(crate) mod users_controller;
