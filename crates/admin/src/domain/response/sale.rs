use crate::{model::Sale as SaleModel, revenue::RevenueError};
use serde::{Deserialize, Serialize};
use shared::utils::format_datetime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct SaleResponse {
    pub id: i32,
    pub product_id: i32,
    pub category_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    /// `quantity * unit_price`
    pub revenue: i64,
    pub sale_date: String,
    pub created_at: String,
}

impl TryFrom<SaleModel> for SaleResponse {
    type Error = RevenueError;

    fn try_from(value: SaleModel) -> Result<Self, Self::Error> {
        let revenue = value.revenue().ok_or(RevenueError::Overflow(value.sale_id))?;

        Ok(SaleResponse {
            id: value.sale_id,
            product_id: value.product_id,
            category_id: value.category_id,
            quantity: value.quantity,
            unit_price: value.unit_price,
            revenue,
            sale_date: format_datetime(value.sale_date),
            created_at: format_datetime(value.created_at),
        })
    }
}
