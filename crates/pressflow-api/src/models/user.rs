//! User model

use serde::{Deserialize, Serialize};

/// The authenticated platform user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: u64,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}
