use std::fmt;

use serde::{Deserialize, Serialize};

/// A synthetic user that a test step can log in as.
///
/// `is_root` is never set by the record itself; the owning user source
/// flags it after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub password: String,
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_root: bool,
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        roles: Vec<String>,
        email: Option<String>,
    ) -> Self {
        UserRecord {
            name: name.into(),
            password: password.into(),
            roles,
            email,
            is_root: false,
        }
    }

    /// Whether this user was assigned `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
