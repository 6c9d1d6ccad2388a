use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{StockCategory, StockCondition, StockItem};
use crate::db::queries;
use crate::error::AppError;
use crate::validation::{
    LOCATION_MAX_LEN, NAME_MAX_LEN, ValidationError, enum_error, sanitize_string,
    validate_max_len, validate_non_negative, validate_required,
};

/// Incoming payload for create and update. Enum fields arrive as free text and
/// are checked against the closed sets here, at the service boundary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItemInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub location: Option<String>,
    pub condition: Option<String>,
    pub date_of_entry: Option<DateTime<Utc>>,
}

#[derive(Debug)]
struct ValidatedItem {
    name: String,
    category: StockCategory,
    quantity: i32,
    location: String,
    condition: StockCondition,
    date_of_entry: Option<DateTime<Utc>>,
}

/// CRUD over stock items. Quantity is also overwritten here on full edits;
/// see the module docs on the race with the transaction decrement path.
#[derive(Clone)]
pub struct StockService {
    pool: PgPool,
}

impl StockService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn validate(input: StockItemInput) -> Result<ValidatedItem, AppError> {
        let name = sanitize_string(input.name.as_deref().unwrap_or(""));
        validate_required("name", &name)?;
        validate_max_len("name", &name, NAME_MAX_LEN)?;

        let category = match input.category.as_deref() {
            Some(raw) => StockCategory::parse(raw.trim())
                .ok_or_else(|| enum_error("category", StockCategory::VALUES))?,
            None => return Err(ValidationError::new("category", "is required").into()),
        };

        let quantity = input
            .quantity
            .ok_or_else(|| ValidationError::new("quantity", "is required"))?;
        validate_non_negative("quantity", quantity)?;

        let location = sanitize_string(input.location.as_deref().unwrap_or(""));
        validate_required("location", &location)?;
        validate_max_len("location", &location, LOCATION_MAX_LEN)?;

        let condition = match input.condition.as_deref() {
            Some(raw) => StockCondition::parse(raw.trim())
                .ok_or_else(|| enum_error("condition", StockCondition::VALUES))?,
            None => StockCondition::default(),
        };

        Ok(ValidatedItem {
            name,
            category,
            quantity,
            location,
            condition,
            date_of_entry: input.date_of_entry,
        })
    }

    pub async fn create(&self, input: StockItemInput) -> Result<StockItem, AppError> {
        let v = Self::validate(input)?;

        let item = StockItem::new(
            v.name,
            v.category,
            v.quantity,
            v.location,
            v.condition,
            v.date_of_entry,
        );

        let created = queries::insert_stock_item(&self.pool, &item).await?;
        tracing::info!(id = %created.id, name = %created.name, "stock item created");

        Ok(created)
    }

    pub async fn get(&self, id: Uuid) -> Result<StockItem, AppError> {
        queries::get_stock_item(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Stock item not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<StockItem>, AppError> {
        Ok(queries::list_stock_items(&self.pool).await?)
    }

    /// Full replace of the mutable fields; `date_of_entry` keeps its value
    /// from creation.
    pub async fn update(&self, id: Uuid, input: StockItemInput) -> Result<StockItem, AppError> {
        let v = Self::validate(input)?;

        queries::update_stock_item(
            &self.pool,
            id,
            &v.name,
            v.category,
            v.quantity,
            &v.location,
            v.condition,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Stock item not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = queries::delete_stock_item(&self.pool, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Stock item not found".to_string()));
        }

        tracing::info!(%id, "stock item deleted");
        Ok(())
    }
}
