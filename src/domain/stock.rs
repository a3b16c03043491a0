use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// A persisted stock row.
///
/// `Default` is the zero-valued stock handed back when a lookup matches no row.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, Display,
)]
#[display("{} ({}) @ {}", name, company, price)]
pub struct Stock {
    pub stockid: i64,
    pub name: String,
    pub price: f64,
    pub company: String,
}

/// Body of a create or update request. The id is always taken from the server (insert) or the
/// path (update), so any id in the body is dropped during decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} ({}) @ {}", name, company, price)]
pub struct StockPayload {
    pub name: String,
    pub price: f64,
    pub company: String,
}
