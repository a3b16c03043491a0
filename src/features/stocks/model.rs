use serde::{Deserialize, Serialize};

/// Acknowledgement returned by the write endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockResponse {
    pub id: i64,
    pub message: String,
}

impl StockResponse {
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "Stock successfully created.".to_string(),
        }
    }

    pub fn updated(id: i64, affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "Stock updated successfully. Total rows/records affected {}",
                affected
            ),
        }
    }

    pub fn deleted(id: i64, affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "Stock deleted successfully. Total rows/records affected {}",
                affected
            ),
        }
    }
}
