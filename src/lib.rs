pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod services;
pub mod validation;

use axum::{
    Router,
    routing::{get, post},
};
use crate::services::{StockService, TransactionService};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub stock: StockService,
    pub transactions: TransactionService,
}

impl AppState {
    pub fn new(db: sqlx::PgPool) -> Self {
        let stock = StockService::new(db.clone());
        let transactions = TransactionService::new(db.clone());
        Self {
            db,
            stock,
            transactions,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/stock",
            get(handlers::stock::list_items).post(handlers::stock::create_item),
        )
        .route(
            "/api/stock/:id",
            get(handlers::stock::get_item)
                .put(handlers::stock::update_item)
                .delete(handlers::stock::delete_item),
        )
        .route(
            "/api/transactions",
            post(handlers::transactions::create_transaction)
                .get(handlers::transactions::list_transactions),
        )
        .fallback(handlers::not_found)
        .with_state(state)
}
