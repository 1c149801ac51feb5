use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllCategories {
    #[serde(default = "super::default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: i32,

    #[serde(default = "super::default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    #[schema(example = "Electronics")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    #[schema(example = "Home Electronics")]
    pub name: String,
}
