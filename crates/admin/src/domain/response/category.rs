use crate::model::Category as CategoryModel;
use serde::{Deserialize, Serialize};
use shared::utils::format_datetime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CategoryModel> for CategoryResponse {
    fn from(value: CategoryModel) -> Self {
        CategoryResponse {
            id: value.category_id,
            name: value.name,
            created_at: format_datetime(value.created_at),
            updated_at: format_datetime(value.updated_at),
        }
    }
}
