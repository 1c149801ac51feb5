use crate::model::Product as ProductModel;
use serde::{Deserialize, Serialize};
use shared::utils::format_datetime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            category_id: value.category_id,
            name: value.name,
            description: value.description,
            price: value.price,
            created_at: format_datetime(value.created_at),
            updated_at: format_datetime(value.updated_at),
        }
    }
}
