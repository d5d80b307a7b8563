//! API server configuration

use std::env;

use anyhow::{bail, Context, Result};
use devshelf_shared_config::{get_optional_env, CommonConfig, DatabaseConfig, Environment};

/// Port the API listens on when `PORT` is unset
pub const DEFAULT_PORT: u16 = 4000;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with the seed loader
    pub common: CommonConfig,

    /// Server port (default: 4000)
    pub port: u16,

    /// Address compared against the `x-user-email` header to grant admin
    pub admin_email: Option<String>,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// In production mode, this function requires:
    /// - `ADMIN_EMAIL`: Must be set, otherwise no mutation could ever succeed
    /// - `DATABASE_URL`: Must be explicitly set (no insecure defaults)
    ///
    /// In development/staging mode, missing values only produce warnings.
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_env();
        let is_production = environment.is_production();

        let admin_email = Self::load_admin_email(is_production)?;

        if is_production {
            Self::validate_database_url()?;
        }

        let common = CommonConfig::from_env().context("Failed to load config")?;

        Ok(Self {
            common,

            port: match env::var("PORT") {
                Ok(port) => port.parse().context("Invalid PORT value")?,
                Err(_) => DEFAULT_PORT,
            },

            admin_email,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Load ADMIN_EMAIL
    ///
    /// In production it must be set. Elsewhere an unset value disables every
    /// mutation and logs a warning.
    fn load_admin_email(is_production: bool) -> Result<Option<String>> {
        match get_optional_env("ADMIN_EMAIL") {
            Some(email) => Ok(Some(email)),
            None if is_production => {
                bail!(
                    "ADMIN_EMAIL environment variable is required in production. \
                     Set it to the address sent in the x-user-email header by admins."
                );
            }
            None => {
                tracing::warn!(
                    "ADMIN_EMAIL not set, all mutations will be rejected as unauthorized."
                );
                Ok(None)
            }
        }
    }

    /// Validate that DATABASE_URL is explicitly set in production
    fn validate_database_url() -> Result<()> {
        match get_optional_env("DATABASE_URL") {
            Some(_) => Ok(()),
            None => {
                bail!(
                    "DATABASE_URL environment variable is required in production. \
                     Please set your PostgreSQL connection string."
                );
            }
        }
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.common.database
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_email_required_in_production() {
        temp_env::with_var_unset("ADMIN_EMAIL", || {
            let result = Config::load_admin_email(true);
            let err = result.unwrap_err().to_string();
            assert!(err.contains("ADMIN_EMAIL"));
            assert!(err.contains("required in production"));
        });
    }

    #[test]
    fn test_admin_email_optional_in_development() {
        temp_env::with_var_unset("ADMIN_EMAIL", || {
            assert_eq!(Config::load_admin_email(false).unwrap(), None);
        });
    }

    #[test]
    fn test_empty_admin_email_fails_in_production() {
        temp_env::with_var("ADMIN_EMAIL", Some(""), || {
            assert!(Config::load_admin_email(true).is_err());
        });
    }

    #[test]
    fn test_admin_email_kept_verbatim() {
        temp_env::with_var("ADMIN_EMAIL", Some("admin@example.com"), || {
            assert_eq!(
                Config::load_admin_email(true).unwrap().as_deref(),
                Some("admin@example.com")
            );
        });
    }

    #[test]
    fn test_database_url_required_in_production() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = Config::validate_database_url().unwrap_err().to_string();
            assert!(err.contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("development")),
                ("PORT", None),
                ("ADMIN_EMAIL", Some("admin@example.com")),
                ("CORS_ORIGINS", None),
                ("DATABASE_MAX_CONNECTIONS", None),
                ("DATABASE_MIN_CONNECTIONS", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.port, DEFAULT_PORT);
                assert_eq!(config.admin_email.as_deref(), Some("admin@example.com"));
                assert!(config.cors_allowed_origins.is_none());
                assert!(!config.is_production());
            },
        );
    }

    #[test]
    fn test_from_env_parses_port_and_origins() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("development")),
                ("PORT", Some("9090")),
                ("ADMIN_EMAIL", None),
                ("CORS_ORIGINS", Some("https://a.example, ,https://b.example")),
                ("DATABASE_MAX_CONNECTIONS", None),
                ("DATABASE_MIN_CONNECTIONS", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.port, 9090);
                assert_eq!(config.admin_email, None);
                assert_eq!(
                    config.cors_allowed_origins.unwrap(),
                    vec!["https://a.example", "https://b.example"]
                );
            },
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("development")),
                ("PORT", Some("not-a-port")),
            ],
            || {
                let err = Config::from_env().unwrap_err().to_string();
                assert!(err.contains("PORT"));
            },
        );
    }
}
