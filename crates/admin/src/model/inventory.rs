use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Inventory {
    pub inventory_id: i32,
    pub product_id: i32,
    pub stock_quantity: i32,
    pub last_updated: NaiveDateTime,
}
