pub(crate) mod api;
pub(crate) mod authentication;
pub(crate) mod error;
pub(crate) mod server;
pub(crate) mod session;
