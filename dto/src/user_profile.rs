use crate::scope::Scope;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The caller's own profile as returned by the backend, scopes included.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct UserProfile {
    uuid: String,
    first_name: String,
    last_name: String,
    email: String,
    scopes: Vec<Scope>,
}

impl UserProfile {
    pub fn new(
        uuid: String,
        first_name: String,
        last_name: String,
        email: String,
        scopes: Vec<Scope>,
    ) -> Self {
        Self {
            uuid,
            first_name,
            last_name,
            email,
            scopes,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl UserProfile {
        pub fn new_test(scopes: Vec<Scope>) -> Self {
            UserProfile {
                uuid: "user-1".to_owned(),
                first_name: "Alex".to_owned(),
                last_name: "Beater".to_owned(),
                email: "alex.beater@club.test".to_owned(),
                scopes,
            }
        }
    }
}
