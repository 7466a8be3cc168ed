use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RegistryError;

// Default configuration constants
pub const DEFAULT_CONFIG_FILE: &str = "codeception.yml";
pub const CONFIG_PATH_ENV: &str = "DUR_CONFIG";
pub const MODULE_NAME: &str = "DrupalUserRegistry";
pub const DEFAULT_USERNAME_PREFIX: &str = "test";
pub const MIN_USERNAME_PREFIX_LEN: usize = 4;
pub const ROOT_FLAG_VALUE: &str = "true";

/// Module configuration as handed over by the suite bootstrap.
///
/// Both configuration shapes share this struct; every key is optional and the
/// user sources decide which ones they require.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Explicit user definitions (enumerated shape).
    #[serde(default)]
    pub users: Option<Vec<UserDefinition>>,
    /// Password used for entries that do not set `pass`.
    #[serde(rename = "defaultPass", default, deserialize_with = "scalar_string")]
    pub default_pass: Option<String>,
    /// Roster-wide root flag; only the literal `"true"` enables it.
    #[serde(default, deserialize_with = "scalar_string")]
    pub root: Option<String>,
    /// Role names to derive one user each from (role-derived shape).
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    /// Password shared by every role-derived user.
    #[serde(default, deserialize_with = "scalar_string")]
    pub password: Option<String>,
    #[serde(
        rename = "drupal_username_prefix",
        alias = "username_prefix",
        default,
        deserialize_with = "scalar_string"
    )]
    pub username_prefix: Option<String>,
}

/// One entry of the `users` list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDefinition {
    #[serde(deserialize_with = "required_scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub pass: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub email: Option<String>,
}

impl ModuleConfig {
    /// Parse a YAML document into a module configuration.
    ///
    /// A full suite file is accepted too: when the document contains
    /// `modules.config.DrupalUserRegistry`, only that subtree is read.
    pub fn from_yaml_str(text: &str) -> Result<Self, RegistryError> {
        let document: serde_yaml::Value = serde_yaml::from_str(text)?;
        let section = document
            .get("modules")
            .and_then(|m| m.get("config"))
            .and_then(|c| c.get(MODULE_NAME))
            .cloned();
        match section {
            Some(module) => Ok(serde_yaml::from_value(module)?),
            None if document.is_null() => Ok(ModuleConfig::default()),
            None => Ok(serde_yaml::from_value(document)?),
        }
    }
}

/// Read and parse the module configuration stored at `path`.
pub fn load_module_config(path: &Path) -> Result<ModuleConfig, RegistryError> {
    let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded module configuration file");
    ModuleConfig::from_yaml_str(&text)
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Resolve the configuration file: explicit path, then `DUR_CONFIG`, then the default file name.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p.trim()),
        _ => env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| PathBuf::from(v.trim()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
    }
}

/// Any YAML scalar where a string is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Str(s) => s,
        }
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(Scalar::into_string))
}

fn required_scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_string)
}
