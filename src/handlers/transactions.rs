use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::AppState;
use crate::db::queries::{SortOrder, TransactionSortKey};
use crate::error::AppError;
use crate::services::transaction::NewTransaction;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub sort: TransactionSortKey,
    #[serde(default)]
    pub order: SortOrder,
    pub search: Option<String>,
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<NewTransaction>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = state.transactions.create(payload).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let records = state
        .transactions
        .list(params.sort, params.order, params.search)
        .await?;

    Ok(Json(records))
}
