use derive_getters::Getters;
use dto::member::Member;
use dto::member_status::is_active;

/// A member list partitioned by current membership status.
/// Derived on demand from a fetched list, never persisted.
#[derive(Debug, Getters, Default, Eq, PartialEq, Clone)]
pub struct ClassifiedMembers {
    active: Vec<Member>,
    inactive: Vec<Member>,
}

impl ClassifiedMembers {
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn inactive_count(&self) -> usize {
        self.inactive.len()
    }

    pub fn total(&self) -> usize {
        self.active.len() + self.inactive.len()
    }
}

/// Partition members into active and inactive groups in a single pass.
/// The relative order within each group matches the input order.
pub fn group_by_active(members: &[Member]) -> ClassifiedMembers {
    let mut classified = ClassifiedMembers::default();
    for member in members {
        if is_active(member) {
            classified.active.push(member.clone());
        } else {
            classified.inactive.push(member.clone());
        }
    }

    classified
}
