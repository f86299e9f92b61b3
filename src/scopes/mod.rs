use dto::scope::Scope;
use dto::scope::Scope::{ClubManagement, ClubsWrite, Emt};

/// Scopes allowed to manage a club's membership (remove members,
/// assign the club manager). Holding ANY one of them is enough.
pub const CLUB_MEMBER_MANAGEMENT: [Scope; 3] = [Emt, ClubsWrite, ClubManagement];

pub fn has_scope(required_scopes: &[Scope], held_scopes: &[Scope]) -> bool {
    required_scopes
        .iter()
        .any(|scope| held_scopes.contains(scope))
}

#[cfg(test)]
mod tests {
    mod has_scope {
        use crate::scopes::{CLUB_MEMBER_MANAGEMENT, has_scope};
        use dto::scope::Scope;
        use dto::scope::Scope::{ClubManagement, ClubsRead, ClubsWrite, Emt, UsersRead};
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            held_scopes = {
            vec![Emt],
            vec![ClubsWrite],
            vec![ClubManagement],
            vec![ClubsRead, ClubManagement],
            vec![ClubsRead, UsersRead],
            vec![],
            },
            expected_result = {
            true,
            true,
            true,
            true,
            false,
            false,
            }
        )]
        fn should_check_club_member_management(held_scopes: Vec<Scope>, expected_result: bool) {
            assert_eq!(
                expected_result,
                has_scope(&CLUB_MEMBER_MANAGEMENT, &held_scopes)
            );
        }

        #[test]
        fn no_required_scope_grants_nothing() {
            assert!(!has_scope(&[], &[Emt]));
        }
    }
}
