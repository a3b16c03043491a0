use crate::config::StockConfig;
use crate::domain::{Stock, StockPayload};
use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::Arc;

pub mod postgres;
pub mod sqlite;

// a StockRepository is shared between request tasks behind an Arc, sqlx::Pool is thread safe.
// every method runs exactly one statement against the pool.
#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn get_stock(&self, id: i64) -> Result<Option<Stock>>;
    async fn get_all_stocks(&self) -> Result<Vec<Stock>>;

    // write operations
    async fn insert_stock(&self, stock: &StockPayload) -> Result<i64>;
    async fn update_stock(&self, id: i64, stock: &StockPayload) -> Result<u64>;
    async fn delete_stock(&self, id: i64) -> Result<u64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            bail!("Unsupported database url {}, expected a postgres:// or sqlite: url", url)
        }
    }
}

/// Opens the pool for whichever backend `config.database_url` names, checks connectivity and
/// makes sure the `stocks` table exists.
pub async fn connect(config: &StockConfig) -> Result<Arc<dyn StockRepository>> {
    let repo: Arc<dyn StockRepository> = match Backend::from_url(&config.database_url)? {
        Backend::Postgres => Arc::new(postgres::PostgresRepository::connect(config).await?),
        Backend::Sqlite => Arc::new(sqlite::SqliteRepository::connect(config).await?),
    };

    repo.ping().await?;
    tracing::info!("Successfully connected to database.");

    Ok(repo)
}
