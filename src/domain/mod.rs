mod stock;

pub use stock::{Stock, StockPayload};
