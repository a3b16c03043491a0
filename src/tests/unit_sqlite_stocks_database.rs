use crate::config::StockConfig;
use crate::database::{self, StockRepository};
use crate::domain::{Stock, StockPayload};
use crate::tests::setup_test_repo;

fn create_mock_stock(name: &str, price: f64, company: &str) -> StockPayload {
    StockPayload {
        name: name.to_string(),
        price,
        company: company.to_string(),
    }
}

// test the database's ability to save and retrieve stocks
#[tokio::test]
async fn test_sqlite_insert_and_retrieve() {
    let repo = setup_test_repo().await;

    let stock = create_mock_stock("Apple", 150.0, "Apple Inc.");
    let id = repo.insert_stock(&stock).await.expect("Should insert stock");

    let retrieved = repo
        .get_stock(id)
        .await
        .expect("Should query")
        .expect("Should find stock");

    assert_eq!(
        retrieved,
        Stock {
            stockid: id,
            name: "Apple".to_string(),
            price: 150.0,
            company: "Apple Inc.".to_string(),
        }
    );
}

// ids come from the database and keep counting up
#[tokio::test]
async fn test_sqlite_generates_ids() {
    let repo = setup_test_repo().await;

    let first = repo
        .insert_stock(&create_mock_stock("Apple", 150.0, "Apple Inc."))
        .await
        .unwrap();
    let second = repo
        .insert_stock(&create_mock_stock("Alphabet", 140.0, "Alphabet Inc."))
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

// a missing row is not an error at this layer
#[tokio::test]
async fn test_sqlite_get_missing_stock() {
    let repo = setup_test_repo().await;

    let retrieved = repo.get_stock(42).await.expect("Should query");
    assert!(retrieved.is_none());
}

#[tokio::test]
async fn test_sqlite_get_all_stocks() {
    let repo = setup_test_repo().await;
    assert!(repo.get_all_stocks().await.unwrap().is_empty());

    for (name, company) in [("Apple", "Apple Inc."), ("Tesla", "Tesla Inc."), ("IBM", "IBM")] {
        repo.insert_stock(&create_mock_stock(name, 10.0, company))
            .await
            .unwrap();
    }

    let stocks = repo.get_all_stocks().await.unwrap();
    assert_eq!(stocks.len(), 3);
    assert!(stocks.iter().any(|s| s.name == "Tesla" && s.company == "Tesla Inc."));
}

#[tokio::test]
async fn test_sqlite_update_existing() {
    let repo = setup_test_repo().await;
    let id = repo
        .insert_stock(&create_mock_stock("Apple", 150.0, "Apple Inc."))
        .await
        .unwrap();

    let affected = repo
        .update_stock(id, &create_mock_stock("Apple", 160.0, "Apple Incorporated"))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let retrieved = repo.get_stock(id).await.unwrap().unwrap();
    assert_eq!(retrieved.price, 160.0);
    assert_eq!(retrieved.company, "Apple Incorporated");
}

// updating an id that doesn't exist must not create it
#[tokio::test]
async fn test_sqlite_update_missing_does_not_insert() {
    let repo = setup_test_repo().await;

    let affected = repo
        .update_stock(7, &create_mock_stock("Ghost", 1.0, "Nobody"))
        .await
        .unwrap();

    assert_eq!(affected, 0);
    assert!(repo.get_stock(7).await.unwrap().is_none());
    assert!(repo.get_all_stocks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_delete() {
    let repo = setup_test_repo().await;
    let id = repo
        .insert_stock(&create_mock_stock("Apple", 150.0, "Apple Inc."))
        .await
        .unwrap();

    assert_eq!(repo.delete_stock(id).await.unwrap(), 1);
    assert!(repo.get_stock(id).await.unwrap().is_none());

    // second delete finds nothing
    assert_eq!(repo.delete_stock(id).await.unwrap(), 0);
}

// values that would break naive string-built sql are stored verbatim
#[tokio::test]
async fn test_sqlite_binds_parameters() {
    let repo = setup_test_repo().await;
    let name = "Robert'); DROP TABLE stocks;--";

    let id = repo
        .insert_stock(&create_mock_stock(name, 1.0, "O'Reilly"))
        .await
        .unwrap();

    let retrieved = repo.get_stock(id).await.unwrap().unwrap();
    assert_eq!(retrieved.name, name);
    assert_eq!(retrieved.company, "O'Reilly");
    assert_eq!(repo.get_all_stocks().await.unwrap().len(), 1);
}

// go through the same startup path main uses, against a database file on disk
#[tokio::test]
async fn test_connect_creates_database_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stocks.db");
    let config = StockConfig {
        database_url: format!("sqlite://{}", path.display()),
        max_connections: 2,
        host: "127.0.0.1".into(),
        port: 0,
    };

    let repo = database::connect(&config).await.expect("Should connect");
    assert!(path.exists());

    let id = repo
        .insert_stock(&create_mock_stock("Apple", 150.0, "Apple Inc."))
        .await
        .unwrap();
    drop(repo);

    // reconnecting keeps existing rows, the table is only created once
    let repo = database::connect(&config).await.expect("Should reconnect");
    let retrieved = repo.get_stock(id).await.unwrap().unwrap();
    assert_eq!(retrieved.name, "Apple");
}

#[tokio::test]
async fn test_connect_rejects_unknown_backend() {
    let config = StockConfig {
        database_url: "mysql://localhost/stocks".into(),
        max_connections: 1,
        host: "127.0.0.1".into(),
        port: 0,
    };

    assert!(database::connect(&config).await.is_err());
}
