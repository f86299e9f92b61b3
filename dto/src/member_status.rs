use crate::member::Member;
use crate::member_status::MemberStatus::{Active, Expired};
use crate::product::Product;
use chrono::Utc;
use serde::Serialize;

/// Whether a member's latest product still grants an active membership.
#[derive(Debug, Serialize, Eq, PartialEq, Clone, Copy)]
pub enum MemberStatus {
    Active,
    Expired,
}

impl MemberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Active => "Active",
            Expired => "Expired",
        }
    }
}

/// A member is active while the expiry of their latest product lies strictly
/// in the future. A member without a product, or with an unreadable expiry,
/// is expired by policy: when in doubt, never grant active status.
pub fn compute_member_status(member: &Member) -> MemberStatus {
    match member.latest_product().and_then(Product::expiry_date) {
        Some(expiry) if expiry > Utc::now().date_naive() => Active,
        _ => Expired,
    }
}

pub fn is_active(member: &Member) -> bool {
    compute_member_status(member) == Active
}
