use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Product {
    pub product_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
