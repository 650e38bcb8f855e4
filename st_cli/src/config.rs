//! CLI configuration management.
//!
//! Consolidates environment variable reads and command-line overrides into a
//! validated configuration.

use swiss_tournament::db::{ConfigError, DatabaseConfig};

/// Database URL used when neither `--db-url` nor `DATABASE_URL` is given
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost/tournament";

/// Complete CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database configuration
    pub database: DatabaseConfig,
    /// Emit JSON instead of plain-text tables
    pub json: bool,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `database_url_override` - Optional database URL (from `--db-url`)
    /// * `json` - Whether `--json` was given
    ///
    /// # Errors
    ///
    /// Returns error if a pool setting in the environment is invalid
    pub fn from_env(
        database_url_override: Option<String>,
        json: bool,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url_override
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let database = DatabaseConfig::from_env_with_url(database_url)?;

        Ok(Self { database, json })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config =
            CliConfig::from_env(Some("postgres://cli@localhost/cup".to_string()), true).unwrap();
        assert_eq!(config.database.database_url, "postgres://cli@localhost/cup");
        assert!(config.json);
    }

    #[test]
    fn test_empty_override_is_invalid() {
        let err = CliConfig::from_env(Some(String::new()), false).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
