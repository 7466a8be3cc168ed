//! Synthetic test-user registry for end-to-end suites.
//!
//! A declarative module configuration (an explicit list of users, or a list
//! of platform roles) is turned into a [`Roster`] of [`UserRecord`]s that
//! test steps can log in as.
//!
//! ```
//! use dur::config::ModuleConfig;
//! use dur::registry::UserRegistry;
//!
//! let config = ModuleConfig::from_yaml_str("roles: [editor]\npassword: secret\n").unwrap();
//! let registry = UserRegistry::from_config(&config).unwrap();
//! assert_eq!(registry.get_user("test.editor").unwrap().password, "secret");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod storage;
pub mod utils;

pub use error::RegistryError;
pub use models::{Roster, UserRecord};
pub use registry::{SourceKind, UserRegistry};
pub use storage::{ConfigurationError, EnumeratedUserSource, RoleDerivedUserSource, UserSource};
