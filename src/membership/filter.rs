use crate::membership::classify::ClassifiedMembers;
use derive_getters::Getters;
use dto::member::Member;
use rocket::FromFormField;
use serde::Serialize;

/// Which subset of an already-classified member list to display.
#[derive(Debug, Default, FromFormField, Eq, PartialEq, Clone, Copy)]
pub enum MemberFilter {
    #[default]
    All,
    Active,
    Inactive,
}

/// Pure selection over the precomputed partition: no reclassification,
/// no mutation. Repeated selection with the same filter is idempotent.
pub fn select_view<'a>(
    all_members: &'a [Member],
    classified: &'a ClassifiedMembers,
    filter: MemberFilter,
) -> &'a [Member] {
    match filter {
        MemberFilter::All => all_members,
        MemberFilter::Active => classified.active(),
        MemberFilter::Inactive => classified.inactive(),
    }
}

/// The three counter badges shown next to the filters.
/// `all == active + inactive` holds by construction.
#[derive(Debug, Getters, Serialize, Eq, PartialEq)]
pub struct MemberCounts {
    all: usize,
    active: usize,
    inactive: usize,
}

pub fn count_members(classified: &ClassifiedMembers) -> MemberCounts {
    MemberCounts {
        all: classified.total(),
        active: classified.active_count(),
        inactive: classified.inactive_count(),
    }
}
