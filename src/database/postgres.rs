use crate::config::StockConfig;
use crate::database::StockRepository;
use crate::domain::{Stock, StockPayload};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub struct PostgresRepository {
    pool: Pool<Postgres>,
}

impl PostgresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &StockConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("Failed to create postgres pool")?;

        sqlx::migrate!("./migrations/postgres")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl StockRepository for PostgresRepository {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database did not answer ping")?;
        Ok(())
    }

    async fn get_stock(&self, id: i64) -> Result<Option<Stock>> {
        let stock = sqlx::query_as::<_, Stock>(
            "SELECT stockid, name, price, company FROM stocks WHERE stockid = $1",
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
            "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid",
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
        let affected =
            sqlx::query("UPDATE stocks SET name = $2, price = $3, company = $4 WHERE stockid = $1")
                .bind(id)
                .bind(&stock.name)
                .bind(stock.price)
                .bind(&stock.company)
                .execute(&self.pool)
                .await
                .with_context(|| format!("Failed to update stock {}", id))?
                .rows_affected();

        tracing::debug!("Total rows/records affected {}", affected);
        Ok(affected)
    }

    async fn delete_stock(&self, id: i64) -> Result<u64> {
        let affected = sqlx::query("DELETE FROM stocks WHERE stockid = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete stock {}", id))?
            .rows_affected();

        tracing::debug!("Total rows/records affected {}", affected);
        Ok(affected)
    }
}
