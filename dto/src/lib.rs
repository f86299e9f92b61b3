pub mod club;
pub mod club_members;
pub mod dates;
pub mod member;
pub mod member_status;
pub mod product;
pub mod scope;
pub mod user_profile;
