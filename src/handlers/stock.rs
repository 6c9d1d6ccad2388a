use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::services::stock::StockItemInput;

/// Ids arrive as raw path text; anything that is not a UUID cannot name an
/// existing item, so it reports the same way as a missing one.
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound("Stock item not found".to_string()))
}

pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state.stock.list().await?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.stock.get(parse_id(&id)?).await?;
    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<StockItemInput>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.stock.create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StockItemInput>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.stock.update(parse_id(&id)?, payload).await?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.stock.delete(parse_id(&id)?).await?;
    Ok(Json(json!({ "message": "Stock item deleted successfully" })))
}
