// Parsing utilities
pub mod parse_flag;

// Naming utilities
pub mod username;

// Re-export all utilities for convenient access
pub use parse_flag::is_literal_true;
pub use username::{role_suffix, synthesize_username};
