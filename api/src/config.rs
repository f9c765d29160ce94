//! Application configuration loading
//!
//! Sources, lowest precedence first:
//! 1. Plain environment variables (`JWT_SIGNER_KEY`, `DATABASE_URL`, ...) via `AppConfig::from_env`
//! 2. `config.toml`, then the file for `APP_ENVIRONMENT` such as `config.production.toml`
//! 3. `IDS__`-prefixed variables with `__` separators, e.g. `IDS__AUTH__JWT__SECRET`

use ids_shared::config::{AppConfig, Environment};
use thiserror::Error;

const ENV_PREFIX: &str = "IDS";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load `.env`, merge every source and validate the result
pub fn load() -> Result<AppConfig, ConfigLoadError> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    let fallback = AppConfig::from_env();

    let settings = config::Config::builder()
        .add_source(config::Config::try_from(&fallback)?)
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::File::with_name(&environment.config_file()).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.validate().map_err(ConfigLoadError::Invalid)?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_survives_round_trip_through_config_sources() {
        let fallback = AppConfig::development();

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&fallback).unwrap())
            .build()
            .unwrap();
        let loaded: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(loaded.server.port, fallback.server.port);
        assert_eq!(loaded.auth.jwt.issuer, fallback.auth.jwt.issuer);
        assert_eq!(loaded.database.backend, fallback.database.backend);
    }

    #[test]
    fn test_toml_source_overrides_fallback() {
        let fallback = AppConfig::development();
        let overrides = r#"
            [auth.jwt]
            secret = "from-file"

            [database]
            backend = "mysql"
            url = "mysql://db/identity"
        "#;

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&fallback).unwrap())
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()
            .unwrap();
        let loaded: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(loaded.auth.jwt.secret, "from-file");
        assert_eq!(loaded.auth.jwt.issuer, "devteria.com");
        assert_eq!(loaded.database.url, "mysql://db/identity");
        assert!(loaded.validate().is_ok());
    }
}
