//! Database Config

use clap::Args;
use sqlx::{Error, postgres::PgConnectOptions};

/// Document store settings.
///
/// A full `DATABASE_URL` wins over the individual parts.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Store host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Store port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "comp_harbor")]
    pub db_name: String,

    /// Store user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// Store password
    #[arg(long, env = "DB_PASS", hide_env_values = true)]
    pub db_pass: Option<String>,
}

impl DatabaseConfig {
    /// Build connection options from the configured URL or parts.
    ///
    /// # Errors
    ///
    /// Returns an error when `DATABASE_URL` cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, Error> {
        if let Some(url) = &self.database_url {
            return url.parse();
        }

        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name);

        if let Some(user) = &self.db_user {
            options = options.username(user);
        }

        if let Some(pass) = &self.db_pass {
            options = options.password(pass);
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn config(database_url: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            database_url: database_url.map(ToString::to_string),
            db_host: "store.internal".to_string(),
            db_port: 6543,
            db_name: "shop".to_string(),
            db_user: Some("shopper".to_string()),
            db_pass: Some("secret".to_string()),
        }
    }

    #[test]
    fn parts_build_options() -> TestResult {
        let options = config(None).connect_options()?;

        assert_eq!(options.get_host(), "store.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("shop"));
        assert_eq!(options.get_username(), "shopper");

        Ok(())
    }

    #[test]
    fn url_overrides_parts() -> TestResult {
        let options = config(Some("postgres://admin@db.example.com:5433/catalog"))
            .connect_options()?;

        assert_eq!(options.get_host(), "db.example.com");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("catalog"));
        assert_eq!(options.get_username(), "admin");

        Ok(())
    }

    #[test]
    fn malformed_url_is_rejected() {
        assert!(config(Some("not a url")).connect_options().is_err());
    }
}
