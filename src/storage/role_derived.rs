use super::{validate_username_prefix, ConfigurationError, UserSource};
use crate::config::{ModuleConfig, DEFAULT_USERNAME_PREFIX};
use crate::models::{Roster, UserRecord};
use crate::utils::synthesize_username;

/// Roster with one synthetic user per configured role.
#[derive(Clone, Debug)]
pub struct RoleDerivedUserSource {
    prefix: String,
    roster: Roster,
}

impl RoleDerivedUserSource {
    /// Build the roster from `config.roles`, sharing `config.password`.
    ///
    /// Usernames are `<prefix>.<role>` with whitespace and hyphens in the role
    /// replaced by `.`; the prefix defaults to `"test"`. Roles that synthesize
    /// the same username collapse to the last one.
    pub fn new(config: &ModuleConfig) -> Result<Self, ConfigurationError> {
        let prefix = match config.username_prefix.as_deref() {
            Some(prefix) => {
                validate_username_prefix(prefix)?;
                prefix.to_string()
            }
            None => DEFAULT_USERNAME_PREFIX.to_string(),
        };
        let password = config.password.as_deref().unwrap_or_default();

        let mut roster = Roster::new();
        for role in config.roles.iter().flatten() {
            let name = synthesize_username(&prefix, role);
            roster.insert(UserRecord::new(name, password, vec![role.clone()], None));
        }

        tracing::debug!(users = roster.len(), %prefix, "built role-derived roster");
        Ok(RoleDerivedUserSource { prefix, roster })
    }

    /// Prefix every synthesized username starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl UserSource for RoleDerivedUserSource {
    fn load(&self) -> &Roster {
        &self.roster
    }
}
