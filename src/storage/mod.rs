//! User sources: strategies that turn module configuration into a [`Roster`].
//!
//! Two strategies implement [`UserSource`]:
//!
//! - [`EnumeratedUserSource`] reads an explicit `users` list.
//! - [`RoleDerivedUserSource`] synthesizes one user per configured role.
//!
//! Both build their roster once, at construction. A source that was
//! constructed successfully always has a complete roster, and [`UserSource::load`]
//! hands out the same one on every call.

mod enumerated;
mod error;
mod role_derived;
mod validation;

pub use enumerated::EnumeratedUserSource;
pub use error::ConfigurationError;
pub use role_derived::RoleDerivedUserSource;
pub use validation::validate_username_prefix;

use crate::models::Roster;

/// A strategy producing the roster of test users.
pub trait UserSource {
    /// The roster built at construction time.
    fn load(&self) -> &Roster;
}
