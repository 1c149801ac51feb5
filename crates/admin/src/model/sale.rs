use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A recorded sale. `unit_price` is the price charged at the time of sale
/// and `category_id` is the product's category at that time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Sale {
    pub sale_id: i32,
    pub product_id: i32,
    pub category_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub sale_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl Sale {
    /// `None` when `quantity * unit_price` does not fit in an `i64`.
    pub fn revenue(&self) -> Option<i64> {
        i64::from(self.quantity).checked_mul(self.unit_price)
    }
}
