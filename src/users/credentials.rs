use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Login credentials, forwarded verbatim to the league backend.
/// They are never stored: only the returned token and scopes are kept.
#[derive(Debug, Getters, Serialize, Deserialize, Clone)]
pub struct UserCredentials {
    email: String,
    password: String,
}

impl UserCredentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}
