use crate::domain::{
    requests::revenue::{RevenuePeriodQuery, RevenueQuery},
    response::revenue::{RevenuePeriodResponse, RevenueResponse},
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynRevenueService = Arc<dyn RevenueServiceTrait + Send + Sync>;

#[async_trait]
pub trait RevenueServiceTrait {
    async fn aggregate_revenue(
        &self,
        req: &RevenueQuery,
    ) -> Result<ApiResponse<RevenueResponse>, ServiceError>;
    async fn revenue_by_period(
        &self,
        req: &RevenuePeriodQuery,
    ) -> Result<ApiResponse<RevenuePeriodResponse>, ServiceError>;
}
