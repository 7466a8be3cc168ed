use super::{ConfigurationError, UserSource};
use crate::config::ModuleConfig;
use crate::models::{Roster, UserRecord};
use crate::utils::is_literal_true;

/// Roster read from an explicit `users` list.
#[derive(Clone, Debug)]
pub struct EnumeratedUserSource {
    roster: Roster,
}

impl EnumeratedUserSource {
    /// Build the roster from `config.users`.
    ///
    /// Each entry's password is its `pass`, or `defaultPass` when `pass` is
    /// absent or empty. When `root` is the literal `"true"`, every user in the
    /// roster is flagged as root. Entries sharing a name collapse to the last one.
    pub fn new(config: &ModuleConfig) -> Result<Self, ConfigurationError> {
        let users = config
            .users
            .as_ref()
            .ok_or(ConfigurationError::MissingUsersList)?;
        if users.is_empty() {
            return Err(ConfigurationError::EmptyUsersList);
        }

        let default_pass = config.default_pass.as_deref().unwrap_or_default();
        // Applies to the whole roster, not a single designated user.
        let root = is_literal_true(config.root.as_deref());

        let mut roster = Roster::new();
        for item in users {
            let password = match item.pass.as_deref() {
                Some(pass) if !pass.is_empty() => pass,
                _ => default_pass,
            };
            let mut user = UserRecord::new(
                item.name.clone(),
                password,
                item.roles.clone(),
                item.email.clone(),
            );
            if root {
                user.is_root = true;
            }
            if let Some(previous) = roster.insert(user) {
                tracing::debug!(name = %previous.name, "duplicate user entry replaced by a later one");
            }
        }

        tracing::debug!(users = roster.len(), root, "built enumerated roster");
        Ok(EnumeratedUserSource { roster })
    }
}

impl UserSource for EnumeratedUserSource {
    fn load(&self) -> &Roster {
        &self.roster
    }
}
