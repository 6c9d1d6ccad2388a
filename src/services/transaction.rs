use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{StockTransaction, TransactionRecord, TransactionType};
use crate::db::queries::{self, SortOrder, TransactionSortKey};
use crate::error::AppError;
use crate::validation::{
    REMARKS_MAX_LEN, ValidationError, enum_error, sanitize_string, validate_at_least_one,
    validate_max_len,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub stock_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub tx_type: Option<String>,
    pub quantity: Option<i32>,
    pub remarks: Option<String>,
}

/// Records stock-depleting events. The create path is the only writer allowed
/// to decrement `stock_items.quantity` through the ledger; the insert and the
/// decrement commit or roll back together.
#[derive(Clone)]
pub struct TransactionService {
    pool: PgPool,
}

impl TransactionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: NewTransaction) -> Result<StockTransaction, AppError> {
        let stock_id = input
            .stock_id
            .ok_or_else(|| AppError::NotFound("Stock item not found".to_string()))?;

        let mut tx = self.pool.begin().await?;

        // Checked in order: existence, availability, then field validation.
        // Early returns drop `tx`, which rolls back.
        let available = queries::get_stock_quantity(&mut tx, stock_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Stock item not found".to_string()))?;

        if let Some(quantity) = input.quantity {
            if quantity > available {
                return Err(AppError::InsufficientStock(
                    "Not enough stock available".to_string(),
                ));
            }
        }

        let tx_type = match input.tx_type.as_deref() {
            Some(raw) => TransactionType::parse(raw.trim())
                .ok_or_else(|| enum_error("type", TransactionType::VALUES))?,
            None => return Err(ValidationError::new("type", "is required").into()),
        };

        let quantity = input
            .quantity
            .ok_or_else(|| ValidationError::new("quantity", "is required"))?;
        validate_at_least_one("quantity", quantity)?;

        let remarks = match input.remarks.as_deref() {
            Some(raw) => {
                let cleaned = sanitize_string(raw);
                validate_max_len("remarks", &cleaned, REMARKS_MAX_LEN)?;
                (!cleaned.is_empty()).then_some(cleaned)
            }
            None => None,
        };

        // The guard in the UPDATE re-checks availability under the row lock,
        // so a concurrent transaction that committed first turns this into
        // zero rows affected instead of a negative quantity.
        let affected = queries::decrement_stock_quantity(&mut tx, stock_id, quantity).await?;
        if affected == 0 {
            tx.rollback().await?;
            return Err(AppError::InsufficientStock(
                "Not enough stock available".to_string(),
            ));
        }

        let record = queries::insert_transaction(
            &mut tx,
            &StockTransaction::new(stock_id, tx_type, quantity, remarks),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            id = %record.id,
            stock_id = %stock_id,
            quantity,
            "transaction recorded"
        );

        Ok(record)
    }

    pub async fn list(
        &self,
        sort: TransactionSortKey,
        order: SortOrder,
        search: Option<String>,
    ) -> Result<Vec<TransactionRecord>, AppError> {
        let search = search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());

        Ok(queries::list_transactions(&self.pool, sort, order, search).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transaction_deserializes_camel_case() {
        let input: NewTransaction = serde_json::from_str(
            r#"{"stockId":"7f1a3cda-5f4e-4bfa-9c6e-0a2b1a4d9f00","type":"Sold","quantity":3,"remarks":"term sale"}"#,
        )
        .unwrap();

        assert!(input.stock_id.is_some());
        assert_eq!(input.tx_type.as_deref(), Some("Sold"));
        assert_eq!(input.quantity, Some(3));
    }

    #[test]
    fn new_transaction_tolerates_missing_fields() {
        let input: NewTransaction = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.stock_id.is_none());
        assert!(input.tx_type.is_none());
        assert!(input.quantity.is_none());
        assert!(input.remarks.is_none());
    }
}
