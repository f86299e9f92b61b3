use cached::{Cached, TimedSizedCache};
use derive_getters::Getters;
use dto::scope::Scope;

const STORAGE_SIZE: usize = 100;
const SESSION_LIFESPAN_SECONDS: u64 = 60 * 60 * 24;

/// What the server remembers about a logged-in caller: the backend bearer
/// token and the scopes the backend granted them.
#[derive(Debug, Getters, Eq, PartialEq, Clone)]
pub struct UserSession {
    token: String,
    scopes: Vec<Scope>,
}

impl UserSession {
    pub fn new(token: String, scopes: Vec<Scope>) -> Self {
        Self { token, scopes }
    }
}

/// A container for storing sessions. Only 100 sessions can be stored at a
/// time, and they expire after one day.
#[derive(Debug)]
pub struct SessionStorage {
    sessions: TimedSizedCache<String, UserSession>,
}

impl SessionStorage {
    pub fn store(&mut self, id: String, session: UserSession) {
        self.sessions.cache_set(id, session);
    }

    pub fn get(&mut self, id: &str) -> Option<&UserSession> {
        self.sessions.cache_get(id)
    }
}

impl Default for SessionStorage {
    fn default() -> Self {
        let sessions =
            TimedSizedCache::with_size_and_lifespan(STORAGE_SIZE, SESSION_LIFESPAN_SECONDS);
        Self { sessions }
    }
}
