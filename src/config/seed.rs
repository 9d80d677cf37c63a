//! Seed configuration for the in-memory store

use serde::Deserialize;

use super::error::ConfigError;
use crate::domain::user::DirectorySeed;

/// Seed configuration
///
/// Only read when no database is configured; PostgreSQL deployments manage
/// users and skills in the database itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Path to a JSON [`DirectorySeed`] file
    #[serde(default)]
    pub path: Option<String>,
}

impl SeedConfig {
    /// The configured path, if any non-blank one was given.
    pub fn path(&self) -> Option<&str> {
        self.path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Read and parse the seed file. `Ok(None)` when no path is configured.
    ///
    /// # Errors
    ///
    /// - `SeedFileUnreadable` if the file cannot be read
    /// - `SeedFileInvalid` if it is not a valid seed document
    pub fn load_directory(&self) -> Result<Option<DirectorySeed>, ConfigError> {
        let Some(path) = self.path() else {
            return Ok(None);
        };

        let raw = std::fs::read_to_string(path).map_err(|source| {
            ConfigError::SeedFileUnreadable {
                path: path.to_string(),
                source,
            }
        })?;
        let seed = serde_json::from_str(&raw).map_err(|source| ConfigError::SeedFileInvalid {
            path: path.to_string(),
            source,
        })?;

        Ok(Some(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(path: &str) -> SeedConfig {
        SeedConfig {
            path: Some(path.to_string()),
        }
    }

    #[test]
    fn test_no_path_loads_nothing() {
        assert!(SeedConfig::default().load_directory().unwrap().is_none());
        assert!(at("  ").load_directory().unwrap().is_none());
    }

    #[test]
    fn test_bundled_seed_file_parses() {
        let config = at(concat!(env!("CARGO_MANIFEST_DIR"), "/seed/directory.json"));
        let seed = config.load_directory().unwrap().unwrap();
        assert_eq!(seed.users.len(), 3);
        assert!(seed.skills.contains(&"First aid".to_string()));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = at("/nonexistent/directory.json").load_directory().unwrap_err();
        assert!(matches!(err, ConfigError::SeedFileUnreadable { .. }));
    }

    #[test]
    fn test_non_seed_document_is_invalid() {
        let config = at(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        let err = config.load_directory().unwrap_err();
        assert!(matches!(err, ConfigError::SeedFileInvalid { .. }));
    }
}
