mod unit_sqlite_stocks_database;

use crate::AppState;
use crate::database::sqlite::SqliteRepository;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

// create a sqlite database in memory to test against
// one connection only, every new in-memory connection would be a brand new empty database
pub async fn setup_test_repo() -> SqliteRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // run migrations to create the stocks table
    SqliteRepository::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    SqliteRepository::new(pool)
}

pub async fn setup_test_state() -> AppState {
    AppState {
        repo: Arc::new(setup_test_repo().await),
    }
}
