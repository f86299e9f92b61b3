use crate::membership::selection::MemberSelection::{Closed, Viewing};
use derive_getters::Getters;
use dto::dates::format_long_date;
use dto::member::Member;
use dto::member_status::{MemberStatus, compute_member_status};
use dto::product::Product;
use serde::Serialize;

const DEFAULT_POSITION: &str = "Utility";

/// State of the member detail panel: closed, or viewing a single member.
/// There is no other state, so a stale selection can never survive a close.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub enum MemberSelection {
    #[default]
    Closed,
    Viewing(Member),
}

/// Emitted whenever the detail panel closes, whatever the reason
/// (dismissal or a confirmed removal). The club aggregate and the member
/// list must then be refreshed together through a single invalidation.
#[derive(Debug, Eq, PartialEq)]
#[must_use = "closing the panel requires refreshing the club roster"]
pub enum RefreshDirective {
    ClubRoster,
}

impl MemberSelection {
    pub fn open(&mut self, member: Member) {
        *self = Viewing(member);
    }

    /// Always returns to [Closed] and drops the selected member.
    pub fn close(&mut self) -> RefreshDirective {
        *self = Closed;
        RefreshDirective::ClubRoster
    }

    pub fn selected(&self) -> Option<&Member> {
        match self {
            Closed => None,
            Viewing(member) => Some(member),
        }
    }
}

/// Projection of a member for the detail panel.
#[derive(Debug, Getters, Serialize, Eq, PartialEq)]
pub struct MemberView {
    full_name: String,
    status: MemberStatus,
    position: String,
    cohort: String,
    membership_expires: Option<String>,
}

impl From<&Member> for MemberView {
    fn from(member: &Member) -> Self {
        let cohort = if *member.is_student() {
            "Student"
        } else {
            "Community"
        };
        MemberView {
            full_name: member.full_name(),
            status: compute_member_status(member),
            position: member
                .position()
                .clone()
                .unwrap_or_else(|| DEFAULT_POSITION.to_owned()),
            cohort: cohort.to_owned(),
            membership_expires: member
                .latest_product()
                .and_then(Product::expiry_date)
                .map(|date| format_long_date(&date)),
        }
    }
}
