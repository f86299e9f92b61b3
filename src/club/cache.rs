use cached::{Cached, TimedSizedCache};
use dto::club_members::ClubAggregate;

const CACHE_SIZE: usize = 100;
const CACHE_LIFESPAN_SECONDS: u64 = 5 * 60;

/// Read-through cache of [ClubAggregate]s, keyed by club uuid.
/// Only 100 aggregates can be stored at a time, and they expire after
/// five minutes. The backend stays the source of truth: every known
/// mutation must call [ClubRosterCache::invalidate].
#[derive(Debug)]
pub struct ClubRosterCache {
    aggregates: TimedSizedCache<String, ClubAggregate>,
}

impl ClubRosterCache {
    pub fn store(&mut self, club_uuid: String, aggregate: ClubAggregate) {
        self.aggregates.cache_set(club_uuid, aggregate);
    }

    pub fn get(&mut self, club_uuid: &str) -> Option<&ClubAggregate> {
        self.aggregates.cache_get(club_uuid)
    }

    /// The single invalidation operation: drops the club record and its
    /// member list as one unit, so the next read fetches both afresh.
    pub fn invalidate(&mut self, club_uuid: &str) {
        self.aggregates.cache_remove(club_uuid);
    }
}

impl Default for ClubRosterCache {
    fn default() -> Self {
        let aggregates =
            TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, CACHE_LIFESPAN_SECONDS);
        Self { aggregates }
    }
}
