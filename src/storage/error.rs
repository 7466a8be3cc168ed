/// Configuration validation errors raised by the user sources
use thiserror::Error;

/// Errors that can occur while building a roster from configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Enumerated source built without a `users` key
    #[error("No \"users\" property found in configuration")]
    MissingUsersList,

    /// Enumerated source given an empty `users` list
    #[error("No users defined in configuration. Cannot load users.")]
    EmptyUsersList,

    /// Role-derived source given a username prefix below the minimum length
    #[error("Username prefix \"{prefix}\" is too short; it must be at least {min} characters")]
    UsernamePrefixTooShort {
        /// The rejected prefix
        prefix: String,
        /// Minimum accepted length, in characters
        min: usize,
    },
}
