//! Domain models shared across services and scenes.

use serde::{Deserialize, Serialize};

/// An authenticated account as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier assigned by the provider.
    pub uid: String,
    /// Address the account was created with; `None` for guest sessions.
    pub email: Option<String>,
}
