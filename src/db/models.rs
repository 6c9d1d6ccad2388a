use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Category of a stock item. Mirrors the `stock_category` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "stock_category")]
pub enum StockCategory {
    Desk,
    Chair,
    Table,
    Bench,
    Whiteboard,
    Computer,
    Projector,
    Cabinet,
    Bookshelf,
    Fan,
    Other,
}

impl StockCategory {
    pub const VALUES: &'static [&'static str] = &[
        "Desk",
        "Chair",
        "Table",
        "Bench",
        "Whiteboard",
        "Computer",
        "Projector",
        "Cabinet",
        "Bookshelf",
        "Fan",
        "Other",
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Desk" => Some(Self::Desk),
            "Chair" => Some(Self::Chair),
            "Table" => Some(Self::Table),
            "Bench" => Some(Self::Bench),
            "Whiteboard" => Some(Self::Whiteboard),
            "Computer" => Some(Self::Computer),
            "Projector" => Some(Self::Projector),
            "Cabinet" => Some(Self::Cabinet),
            "Bookshelf" => Some(Self::Bookshelf),
            "Fan" => Some(Self::Fan),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Physical condition of a stock item. Mirrors the `stock_condition` Postgres enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "stock_condition")]
pub enum StockCondition {
    #[default]
    Good,
    Fair,
    #[sqlx(rename = "Repair Needed")]
    #[serde(rename = "Repair Needed")]
    RepairNeeded,
}

impl StockCondition {
    pub const VALUES: &'static [&'static str] = &["Good", "Fair", "Repair Needed"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Good" => Some(Self::Good),
            "Fair" => Some(Self::Fair),
            "Repair Needed" => Some(Self::RepairNeeded),
            _ => None,
        }
    }
}

/// How stock left the inventory. Mirrors the `transaction_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_type")]
pub enum TransactionType {
    Damage,
    Lost,
    Sold,
    Transferred,
}

impl TransactionType {
    pub const VALUES: &'static [&'static str] = &["Damage", "Lost", "Sold", "Transferred"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Damage" => Some(Self::Damage),
            "Lost" => Some(Self::Lost),
            "Sold" => Some(Self::Sold),
            "Transferred" => Some(Self::Transferred),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: Uuid,
    pub name: String,
    pub category: StockCategory,
    pub quantity: i32,
    pub location: String,
    pub condition: StockCondition,
    pub date_of_entry: DateTime<Utc>,
}

impl StockItem {
    pub fn new(
        name: String,
        category: StockCategory,
        quantity: i32,
        location: String,
        condition: StockCondition,
        date_of_entry: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            quantity,
            location,
            condition,
            date_of_entry: date_of_entry.unwrap_or_else(Utc::now),
        }
    }
}

/// Append-only record of stock leaving inventory. `stock_id` goes NULL if the
/// referenced item is later hard-deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransaction {
    pub id: Uuid,
    pub stock_id: Option<Uuid>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub quantity: i32,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StockTransaction {
    pub fn new(
        stock_id: Uuid,
        tx_type: TransactionType,
        quantity: i32,
        remarks: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            stock_id: Some(stock_id),
            tx_type,
            quantity,
            remarks,
            created_at: Utc::now(),
        }
    }
}

/// A transaction joined with its stock item's descriptive fields at read time.
/// The stock fields are None when the item has been deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: Uuid,
    pub stock_id: Option<Uuid>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub quantity: i32,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub stock_name: Option<String>,
    pub stock_category: Option<StockCategory>,
    pub stock_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_category() {
        for value in StockCategory::VALUES {
            assert!(StockCategory::parse(value).is_some(), "failed on {value}");
        }
        assert!(StockCategory::parse("Sofa").is_none());
        assert!(StockCategory::parse("desk").is_none());
    }

    #[test]
    fn parses_condition_including_spaced_variant() {
        assert_eq!(StockCondition::parse("Good"), Some(StockCondition::Good));
        assert_eq!(
            StockCondition::parse("Repair Needed"),
            Some(StockCondition::RepairNeeded)
        );
        assert!(StockCondition::parse("RepairNeeded").is_none());
    }

    #[test]
    fn default_condition_is_good() {
        assert_eq!(StockCondition::default(), StockCondition::Good);
    }

    #[test]
    fn parses_transaction_types() {
        assert_eq!(TransactionType::parse("Sold"), Some(TransactionType::Sold));
        assert!(TransactionType::parse("Donated").is_none());
    }

    #[test]
    fn stock_item_serializes_camel_case() {
        let item = StockItem::new(
            "Office Chair".to_string(),
            StockCategory::Chair,
            4,
            "Room 12".to_string(),
            StockCondition::RepairNeeded,
            None,
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Office Chair");
        assert_eq!(json["category"], "Chair");
        assert_eq!(json["condition"], "Repair Needed");
        assert!(json.get("dateOfEntry").is_some());
        assert!(json.get("date_of_entry").is_none());
    }

    #[test]
    fn transaction_serializes_type_field() {
        let tx = StockTransaction::new(Uuid::new_v4(), TransactionType::Lost, 2, None);
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "Lost");
        assert_eq!(json["quantity"], 2);
        assert!(json.get("stockId").is_some());
    }
}
