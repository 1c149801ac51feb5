use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllSales {
    #[schema(example = "2024-01-01")]
    pub start_date: Option<String>,

    #[schema(example = "2024-01-31")]
    pub end_date: Option<String>,

    pub product_id: Option<i32>,

    pub category_id: Option<i32>,

    #[serde(default = "super::default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: i32,

    #[serde(default = "super::default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub page_size: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSaleRequest {
    #[validate(range(min = 1, message = "product_id must be positive"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, max = 1000000, message = "Quantity must be between 1 and 1000000"))]
    #[schema(example = 2)]
    pub quantity: i32,

    /// Minor currency units. Defaults to the product's current price.
    #[validate(range(
        min = 1,
        max = 1000000000000i64,
        message = "Unit price must be between 1 and 1000000000000"
    ))]
    #[schema(example = 2499)]
    pub unit_price: Option<i64>,

    /// Defaults to now (UTC).
    #[schema(example = "2024-01-05T12:00:00Z")]
    pub sale_date: Option<String>,
}

/// A sale with defaults resolved against its product, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSale {
    pub product_id: i32,
    pub category_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub sale_date: NaiveDateTime,
}
