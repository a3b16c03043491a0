use crate::config::StockConfig;
use crate::database::StockRepository;
use crate::domain::{Stock, StockPayload};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &StockConfig) -> Result<Self> {
        // verify db exists
        if !Sqlite::database_exists(&config.database_url)
            .await
            .unwrap_or(false)
        {
            tracing::info!("No database at {}, creating...", config.database_url);
            Sqlite::create_database(&config.database_url)
                .await
                .with_context(|| format!("Unable to create database at {}", config.database_url))?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

        Self::migrate(&pool).await?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(pool: &Pool<Sqlite>) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(pool)
            .await
            .context("Failed to run database migrations")
    }
}

#[async_trait]
impl StockRepository for SqliteRepository {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database did not answer ping")?;
        Ok(())
    }

    async fn get_stock(&self, id: i64) -> Result<Option<Stock>> {
        let stock = sqlx::query_as::<_, Stock>(
            "SELECT stockid, name, price, company FROM stocks WHERE stockid = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to get stock {}", id))?;

        if stock.is_none() {
            tracing::debug!("No rows were returned for stock {}", id);
        }

        Ok(stock)
    }

    async fn get_all_stocks(&self) -> Result<Vec<Stock>> {
        sqlx::query_as::<_, Stock>("SELECT stockid, name, price, company FROM stocks")
            .fetch_all(&self.pool)
            .await
            .context("Failed to get all stocks")
    }

    async fn insert_stock(&self, stock: &StockPayload) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO stocks (name, price, company) VALUES (?, ?, ?) RETURNING stockid",
        )
        .bind(&stock.name)
        .bind(stock.price)
        .bind(&stock.company)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Failed to insert stock {}", stock))?;

        tracing::debug!("Inserted a single record {}", id);
        Ok(id)
    }

    async fn update_stock(&self, id: i64, stock: &StockPayload) -> Result<u64> {
        let affected = sqlx::query("UPDATE stocks SET name = ?, price = ?, company = ? WHERE stockid = ?")
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to update stock {}", id))?
            .rows_affected();

        tracing::debug!("Total rows/records affected {}", affected);
        Ok(affected)
    }

    async fn delete_stock(&self, id: i64) -> Result<u64> {
        let affected = sqlx::query("DELETE FROM stocks WHERE stockid = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete stock {}", id))?
            .rows_affected();

        tracing::debug!("Total rows/records affected {}", affected);
        Ok(affected)
    }
}
