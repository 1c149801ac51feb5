use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    #[serde(default = "super::default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: i32,

    #[serde(default = "super::default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,

    #[validate(range(min = 1, message = "category_id must be positive"))]
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(range(min = 1, message = "category_id must be positive"))]
    #[schema(example = 1)]
    pub category_id: i32,

    #[validate(length(min = 1, max = 200, message = "Name must be 1 to 200 characters"))]
    #[schema(example = "Wireless Mouse")]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Description is limited to 2000 characters"))]
    #[schema(example = "2.4GHz, USB receiver")]
    pub description: String,

    /// Minor currency units.
    #[validate(range(
        min = 1,
        max = 1000000000000i64,
        message = "Price must be between 1 and 1000000000000"
    ))]
    #[schema(example = 2499)]
    pub price: i64,
}
