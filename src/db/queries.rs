use crate::db::models::{
    StockCategory, StockCondition, StockItem, StockTransaction, TransactionRecord,
};
use serde::Deserialize;
use sqlx::{PgPool, Postgres, Result, Transaction as SqlxTransaction};
use uuid::Uuid;

// --- Stock item queries ---

pub async fn insert_stock_item(pool: &PgPool, item: &StockItem) -> Result<StockItem> {
    sqlx::query_as::<_, StockItem>(
        r#"
        INSERT INTO stock_items (id, name, category, quantity, location, condition, date_of_entry)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(item.id)
    .bind(&item.name)
    .bind(item.category)
    .bind(item.quantity)
    .bind(&item.location)
    .bind(item.condition)
    .bind(item.date_of_entry)
    .fetch_one(pool)
    .await
}

pub async fn get_stock_item(pool: &PgPool, id: Uuid) -> Result<Option<StockItem>> {
    sqlx::query_as::<_, StockItem>("SELECT * FROM stock_items WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_stock_items(pool: &PgPool) -> Result<Vec<StockItem>> {
    sqlx::query_as::<_, StockItem>("SELECT * FROM stock_items ORDER BY date_of_entry DESC")
        .fetch_all(pool)
        .await
}

/// Full replace of the mutable fields. `date_of_entry` stays as set at creation.
#[allow(clippy::too_many_arguments)]
pub async fn update_stock_item(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    category: StockCategory,
    quantity: i32,
    location: &str,
    condition: StockCondition,
) -> Result<Option<StockItem>> {
    sqlx::query_as::<_, StockItem>(
        r#"
        UPDATE stock_items
        SET name = $2, category = $3, quantity = $4, location = $5, condition = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(category)
    .bind(quantity)
    .bind(location)
    .bind(condition)
    .fetch_optional(pool)
    .await
}

/// Returns the number of rows deleted (0 when the id is absent).
pub async fn delete_stock_item(pool: &PgPool, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM stock_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// --- Transaction queries ---

pub async fn get_stock_quantity(
    executor: &mut SqlxTransaction<'_, Postgres>,
    stock_id: Uuid,
) -> Result<Option<i32>> {
    sqlx::query_scalar::<_, i32>("SELECT quantity FROM stock_items WHERE id = $1")
        .bind(stock_id)
        .fetch_optional(&mut **executor)
        .await
}

/// Conditional decrement: the `quantity >= $2` guard is what keeps two
/// concurrent transactions from jointly driving the quantity negative.
/// Zero rows affected means the guard (or the id lookup) failed.
pub async fn decrement_stock_quantity(
    executor: &mut SqlxTransaction<'_, Postgres>,
    stock_id: Uuid,
    quantity: i32,
) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE stock_items SET quantity = quantity - $2 WHERE id = $1 AND quantity >= $2",
    )
    .bind(stock_id)
    .bind(quantity)
    .execute(&mut **executor)
    .await?;

    Ok(result.rows_affected())
}

pub async fn insert_transaction(
    executor: &mut SqlxTransaction<'_, Postgres>,
    tx: &StockTransaction,
) -> Result<StockTransaction> {
    sqlx::query_as::<_, StockTransaction>(
        r#"
        INSERT INTO stock_transactions (id, stock_id, type, quantity, remarks, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(tx.id)
    .bind(tx.stock_id)
    .bind(tx.tx_type)
    .bind(tx.quantity)
    .bind(&tx.remarks)
    .bind(tx.created_at)
    .fetch_one(&mut **executor)
    .await
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TransactionSortKey {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "quantity")]
    Quantity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[default]
    #[serde(rename = "desc")]
    Desc,
}

/// Read-time join with the stock item; deleted items surface NULL stock fields.
/// The ORDER BY fragment is assembled from the closed enums above, never from
/// caller-supplied text.
pub async fn list_transactions(
    pool: &PgPool,
    sort: TransactionSortKey,
    order: SortOrder,
    search: Option<&str>,
) -> Result<Vec<TransactionRecord>> {
    let column = match sort {
        TransactionSortKey::CreatedAt => "t.created_at",
        TransactionSortKey::Quantity => "t.quantity",
    };
    let direction = match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };

    let base = r#"
        SELECT t.id, t.stock_id, t.type, t.quantity, t.remarks, t.created_at,
               s.name AS stock_name, s.category AS stock_category, s.location AS stock_location
        FROM stock_transactions t
        LEFT JOIN stock_items s ON s.id = t.stock_id
    "#;

    match search {
        Some(term) => {
            let sql = format!(
                "{base} WHERE s.name ILIKE '%' || $1 || '%' ORDER BY {column} {direction}"
            );
            sqlx::query_as::<_, TransactionRecord>(&sql)
                .bind(term)
                .fetch_all(pool)
                .await
        }
        None => {
            let sql = format!("{base} ORDER BY {column} {direction}");
            sqlx::query_as::<_, TransactionRecord>(&sql)
                .fetch_all(pool)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_params_deserialize_from_query_values() {
        #[derive(Deserialize)]
        struct Params {
            sort: TransactionSortKey,
            order: SortOrder,
        }

        let params: Params =
            serde_json::from_str(r#"{"sort":"quantity","order":"asc"}"#).unwrap();
        assert_eq!(params.sort, TransactionSortKey::Quantity);
        assert_eq!(params.order, SortOrder::Asc);

        assert!(serde_json::from_str::<Params>(r#"{"sort":"remarks","order":"asc"}"#).is_err());
    }

    #[test]
    fn sort_defaults_match_the_listing_page() {
        assert_eq!(TransactionSortKey::default(), TransactionSortKey::CreatedAt);
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
