//! Cloud provider model

use serde::{Deserialize, Serialize};

/// A cloud provider account connected to a team
///
/// The platform provisions all regional resources (networks, database
/// servers, cache clusters) inside one of these accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudProvider {
    /// Provider ID
    pub id: u64,

    /// Display name given when the account was connected
    pub name: String,

    /// ID of the owning team
    pub team_id: u64,
}
