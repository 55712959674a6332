use std::str::FromStr;

use serde::Deserialize;

/// Database backend selected via `DATABASE_CLIENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseClient {
    Postgres,
}

impl FromStr for DatabaseClient {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pg" | "postgres" => Ok(DatabaseClient::Postgres),
            other => anyhow::bail!("unsupported DATABASE_CLIENT: {other}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_client: DatabaseClient,
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_client = std::env::var("DATABASE_CLIENT")
            .map_err(|_| anyhow::anyhow!("DATABASE_CLIENT is not set"))?
            .parse::<DatabaseClient>()?;
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL is not set"))?;
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {v}"))?,
            Err(_) => 3333,
        };
        Ok(Self {
            database_client,
            database_url,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pg_and_postgres_aliases() {
        assert_eq!(
            "pg".parse::<DatabaseClient>().unwrap(),
            DatabaseClient::Postgres
        );
        assert_eq!(
            "postgres".parse::<DatabaseClient>().unwrap(),
            DatabaseClient::Postgres
        );
    }

    #[test]
    fn rejects_unsupported_client() {
        let err = "sqlite".parse::<DatabaseClient>().unwrap_err();
        assert!(err.to_string().contains("unsupported DATABASE_CLIENT"));
    }
}
