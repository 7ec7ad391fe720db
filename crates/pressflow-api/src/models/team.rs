//! Team model

use serde::{Deserialize, Serialize};

/// A team — the account-level tenant that owns every other resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: u64,

    /// Team name
    pub name: String,

    /// ID of the user who owns the team
    pub owner_id: u64,
}
