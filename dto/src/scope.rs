use serde::{Deserialize, Serialize};

/// A capability granted to the current caller by the backend.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Elevated staff of the governing body.
    Emt,
    ClubsRead,
    ClubsWrite,
    ClubManagement,
    UsersRead,
    UsersWrite,
}
