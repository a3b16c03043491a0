use anyhow::{Context, Result, anyhow};

#[derive(Clone, Debug)]
pub struct StockConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl StockConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // same as from_env, but reads values through `lookup` so tests don't have to mutate the
    // process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // DATABASE_URL is what sqlx tooling expects, POSTGRES_URL is kept for older .env files
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("POSTGRES_URL"))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                anyhow!("Failed to determine DATABASE_URL (or POSTGRES_URL) from environment variables")
            })?;

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|val| *val > 0)
            .unwrap_or(15);

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(val) => val
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", val))?,
            None => 8000,
        };

        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
