pub mod model;

use crate::AppState;
use crate::domain::{Stock, StockPayload};
use crate::error::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use model::StockResponse;

pub fn stocks_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/stock",
            get(list_stocks_handler).post(create_stock_handler),
        )
        .route(
            "/api/stock/{id}",
            get(get_stock_handler)
                .put(update_stock_handler)
                .delete(delete_stock_handler),
        )
}

// ids arrive as raw strings so a non-numeric id becomes our own 400 instead of axum's plain text
// rejection
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

async fn create_stock_handler(
    State(state): State<AppState>,
    payload: Result<Json<StockPayload>, JsonRejection>,
) -> Result<Json<StockResponse>, ApiError> {
    let Json(stock) = payload?;

    let id = state.repo.insert_stock(&stock).await?;
    tracing::info!("Created stock {} as {}", stock, id);

    Ok(Json(StockResponse::created(id)))
}

// a missing row is answered with the zero-valued stock and a 200, not a 404
async fn get_stock_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Stock>, ApiError> {
    let id = parse_id(&raw_id)?;

    let stock = state.repo.get_stock(id).await?.unwrap_or_default();

    Ok(Json(stock))
}

async fn list_stocks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stock>>, ApiError> {
    let stocks = state.repo.get_all_stocks().await?;

    Ok(Json(stocks))
}

async fn update_stock_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<StockPayload>, JsonRejection>,
) -> Result<Json<StockResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Json(stock) = payload?;

    let affected = state.repo.update_stock(id, &stock).await?;
    tracing::info!("Updated stock {}, {} row(s) affected", id, affected);

    Ok(Json(StockResponse::updated(id, affected)))
}

async fn delete_stock_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<StockResponse>, ApiError> {
    let id = parse_id(&raw_id)?;

    let affected = state.repo.delete_stock(id).await?;
    tracing::info!("Deleted stock {}, {} row(s) affected", id, affected);

    Ok(Json(StockResponse::deleted(id, affected)))
}
