//! Source selection and lookups over the loaded roster.

use std::fmt;

use crate::config::ModuleConfig;
use crate::error::RegistryError;
use crate::models::{Roster, UserRecord};
use crate::storage::{EnumeratedUserSource, RoleDerivedUserSource, UserSource};

/// Which strategy produced the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Enumerated,
    RoleDerived,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Enumerated => "enumerated",
            SourceKind::RoleDerived => "role-derived",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type BoxedSource = Box<dyn UserSource + Send + Sync>;

/// Test users available to a suite.
pub struct UserRegistry {
    kind: SourceKind,
    source: BoxedSource,
}

impl UserRegistry {
    /// Pick a user source from the configured keys and build it.
    ///
    /// A `users` list wins over `roles`. With neither present the
    /// configuration is rejected.
    pub fn from_config(config: &ModuleConfig) -> Result<Self, RegistryError> {
        let (kind, source) = if config.users.is_some() {
            let source: BoxedSource = Box::new(EnumeratedUserSource::new(config)?);
            (SourceKind::Enumerated, source)
        } else if config.roles.is_some() {
            let source: BoxedSource = Box::new(RoleDerivedUserSource::new(config)?);
            (SourceKind::RoleDerived, source)
        } else {
            return Err(RegistryError::NoUserSource);
        };

        for user in source.load() {
            if user.password.is_empty() {
                tracing::warn!(name = %user.name, "test user has an empty password");
            }
        }
        tracing::info!(source = %kind, users = source.load().len(), "loaded test users");

        Ok(UserRegistry { kind, source })
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The full roster.
    pub fn users(&self) -> &Roster {
        self.source.load()
    }

    pub fn get_user(&self, name: &str) -> Result<&UserRecord, RegistryError> {
        self.users()
            .get(name)
            .ok_or_else(|| RegistryError::UnknownUser(name.to_string()))
    }

    /// First user, in roster order, that holds `role`.
    pub fn get_user_by_role(&self, role: &str) -> Result<&UserRecord, RegistryError> {
        self.users()
            .iter()
            .find(|u| u.has_role(role))
            .ok_or_else(|| RegistryError::NoUserWithRole(role.to_string()))
    }

    /// First root-flagged user, in roster order.
    pub fn get_root_user(&self) -> Result<&UserRecord, RegistryError> {
        self.users()
            .iter()
            .find(|u| u.is_root)
            .ok_or(RegistryError::NoRootUser)
    }

    /// Distinct role names across the roster, in first-seen order.
    pub fn get_roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = Vec::new();
        for role in self.users().iter().flat_map(|u| u.roles.iter()) {
            if !roles.contains(&role.as_str()) {
                roles.push(role);
            }
        }
        roles
    }
}

impl fmt::Debug for UserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistry")
            .field("kind", &self.kind)
            .field("users", self.users())
            .finish()
    }
}
