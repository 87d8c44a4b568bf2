//! Configuration management
//!
//! Loads the service configuration from `config.toml` with environment
//! overrides. Configuration covers the accounts provisioned at startup;
//! everything else about the core is fixed by the API.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Service configuration loaded at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Accounts registered when the repository is bootstrapped.
    pub accounts: Vec<AccountConfig>,
}

/// A seed account: the user name doubles as the root folder name.
#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfig {
    pub name: String,
    pub password: String,
}

impl ServiceConfig {
    /// Load configuration from `config.toml` with environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("RESOURCE_VAULT").separator("_"))
            .build()?;

        let config: ServiceConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        for account in &self.accounts {
            if account.name.is_empty() {
                return Err(ConfigError::Message("account name cannot be empty".into()));
            }
            if account.password.is_empty() {
                return Err(ConfigError::Message(format!(
                    "account {} has an empty password",
                    account.name
                )));
            }
        }

        let mut names: Vec<&str> = self.accounts.iter().map(|a| a.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.accounts.len() {
            return Err(ConfigError::Message("duplicate account names".into()));
        }

        Ok(())
    }
}
