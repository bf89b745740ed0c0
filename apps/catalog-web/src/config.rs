//! Configuration for the catalog web app

use core_config::{app_info, env_flag, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Seed the store with the demo products on startup (`CATALOG_SEED_DEMO`).
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let seed_demo_data = env_flag("CATALOG_SEED_DEMO", false);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_demo_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(
            [
                "APP_ENV",
                "HOST",
                "PORT",
                "CORS_ALLOWED_ORIGIN",
                "CATALOG_SEED_DEMO",
                "SHUTDOWN_TIMEOUT_SECS",
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(config.app.name, "catalog_web");
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.port, 8080);
                assert!(!config.seed_demo_data);
            },
        );
    }

    #[test]
    fn test_config_reads_seed_flag_and_environment() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("3010")),
                ("CATALOG_SEED_DEMO", Some("true")),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 3010);
                assert!(config.seed_demo_data);
            },
        );
    }

    #[test]
    fn test_config_rejects_invalid_port() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
