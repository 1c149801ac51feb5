use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllInventory {
    #[serde(default = "super::default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: i32,

    #[serde(default = "super::default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub page_size: i32,

    /// Only records with `stock_quantity <= low_stock_threshold`.
    #[validate(range(min = 0, message = "Threshold cannot be negative"))]
    pub low_stock_threshold: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryRequest {
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 120)]
    pub stock_quantity: i32,
}
