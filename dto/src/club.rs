use crate::member::Member;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A club affiliated to the governing body.
/// `managed_by` references the uuid of the managing member, if any.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Club {
    uuid: String,
    name: String,
    managed_by: Option<String>,
}

impl Club {
    pub fn new(uuid: String, name: String, managed_by: Option<String>) -> Self {
        Self {
            uuid,
            name,
            managed_by,
        }
    }

    pub fn is_managed_by(&self, member: &Member) -> bool {
        self.managed_by.as_deref() == Some(member.uuid())
    }
}

/// Body of the manager assignment request, forwarded verbatim to the backend.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct ManagerAssignment {
    managed_by: String,
}

impl ManagerAssignment {
    pub fn new(managed_by: String) -> Self {
        Self { managed_by }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::member::tests::{active_member, expired_member};

    impl Club {
        pub fn new_test(managed_by: Option<String>) -> Self {
            Club {
                uuid: "club-1".to_owned(),
                name: "London Unicorns".to_owned(),
                managed_by,
            }
        }
    }

    #[test]
    fn should_recognize_manager() {
        let manager = active_member();
        let club = Club::new_test(Some(manager.uuid().to_owned()));

        assert!(club.is_managed_by(&manager));
        assert!(!club.is_managed_by(&expired_member()));
    }

    #[test]
    fn should_recognize_no_manager() {
        let club = Club::new_test(None);
        assert!(!club.is_managed_by(&active_member()));
    }
}
