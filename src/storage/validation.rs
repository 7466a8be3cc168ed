/// Checks shared by the user sources
use super::error::ConfigurationError;
use crate::config::MIN_USERNAME_PREFIX_LEN;

/// Reject username prefixes shorter than [`MIN_USERNAME_PREFIX_LEN`] characters.
///
/// Length is counted in characters, not bytes.
pub fn validate_username_prefix(prefix: &str) -> Result<(), ConfigurationError> {
    if prefix.chars().count() < MIN_USERNAME_PREFIX_LEN {
        return Err(ConfigurationError::UsernamePrefixTooShort {
            prefix: prefix.to_string(),
            min: MIN_USERNAME_PREFIX_LEN,
        });
    }
    Ok(())
}
