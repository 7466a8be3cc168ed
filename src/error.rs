/// Error types for loading configuration and querying the registry
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::ConfigurationError;

/// Errors raised while bootstrapping or querying a [`crate::UserRegistry`]
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The configuration file could not be read
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid YAML or has the wrong shape
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Neither a `users` list nor a `roles` list was configured
    #[error("No \"users\" or \"roles\" property found in configuration")]
    NoUserSource,

    /// The selected user source rejected the configuration
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("No test user named \"{0}\"")]
    UnknownUser(String),

    #[error("No test user holds the role \"{0}\"")]
    NoUserWithRole(String),

    #[error("No root test user is configured")]
    NoRootUser,
}
