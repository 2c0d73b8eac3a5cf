use core_config::{AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::sql::DatabaseConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations at startup (`DB_RUN_MIGRATIONS`)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let run_migrations = env_parse_or("DB_RUN_MIGRATIONS", environment.is_development())?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None),
                ("DATABASE_URL", Some("sqlite::memory:")),
                ("DB_RUN_MIGRATIONS", None),
                ("HOST", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.environment, Environment::Development);
                assert!(config.run_migrations);
                assert_eq!(config.server.address(), "0.0.0.0:8080");
                assert_eq!(config.app.name, "todo_api");
            },
        );
    }

    #[test]
    fn test_production_does_not_migrate_unless_asked() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("DATABASE_URL", Some("postgres://todo@db/todo")),
                ("DB_RUN_MIGRATIONS", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert!(!config.run_migrations);
            },
        );

        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("DATABASE_URL", Some("postgres://todo@db/todo")),
                ("DB_RUN_MIGRATIONS", Some("true")),
            ],
            || assert!(Config::from_env().unwrap().run_migrations),
        );
    }

    #[test]
    fn test_missing_database_url_fails() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_invalid_port_fails() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("sqlite::memory:")),
                ("PORT", Some("eighty")),
            ],
            || assert!(Config::from_env().is_err()),
        );
    }
}
