use crate::club::Club;
use crate::member::Member;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Wire shape of the backend's club members endpoint.
/// Summer pass holders live in a separate population: they are merged with
/// regular members for display and export, never stored together.
#[derive(Debug, Getters, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
pub struct ClubMembersResponse {
    members: Vec<Member>,
    #[serde(rename = "studentSummerPassMembers")]
    student_summer_pass_members: Vec<Member>,
}

impl ClubMembersResponse {
    pub fn new(members: Vec<Member>, student_summer_pass_members: Vec<Member>) -> Self {
        Self {
            members,
            student_summer_pass_members,
        }
    }

    /// Both populations, regular members first.
    pub fn all_members(&self) -> Vec<Member> {
        let mut all = self.members.clone();
        all.extend(self.student_summer_pass_members.iter().cloned());
        all
    }
}

/// A club together with its member populations.
/// This is the unit of caching: it is stored and invalidated as a whole,
/// so the club record and the member list can never drift apart.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct ClubAggregate {
    club: Club,
    members: ClubMembersResponse,
}

impl ClubAggregate {
    pub fn new(club: Club, members: ClubMembersResponse) -> Self {
        Self { club, members }
    }
}

#[cfg(test)]
mod tests {
    mod all_members {
        use crate::club_members::ClubMembersResponse;
        use crate::member::tests::{active_member, expired_member, productless_member};

        #[test]
        fn regular_members_come_first() {
            let response = ClubMembersResponse::new(
                vec![active_member(), expired_member()],
                vec![productless_member()],
            );

            assert_eq!(
                vec![active_member(), expired_member(), productless_member()],
                response.all_members()
            );
        }

        #[test]
        fn empty_when_both_populations_are_empty() {
            assert!(ClubMembersResponse::default().all_members().is_empty());
        }
    }
}
