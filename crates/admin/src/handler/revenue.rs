use crate::{
    abstract_trait::revenue::DynRevenueService,
    domain::{
        requests::revenue::{RevenuePeriodQuery, RevenueQuery},
        response::revenue::{RevenuePeriodResponse, RevenueResponse},
    },
    middleware::validate::SimpleValidatedQuery,
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::responses::ApiResponse,
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/revenue",
    tag = "Revenue",
    params(RevenueQuery),
    responses(
        (status = 200, description = "Revenue over the matching sales", body = ApiResponse<RevenueResponse>),
        (status = 400, description = "Malformed filter or inverted date range", body = ErrorResponse),
        (status = 404, description = "Referenced product or category not found", body = ErrorResponse)
    )
)]
pub async fn get_revenue(
    Extension(service): Extension<DynRevenueService>,
    SimpleValidatedQuery(params): SimpleValidatedQuery<RevenueQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.aggregate_revenue(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/revenue/periods",
    tag = "Revenue",
    params(RevenuePeriodQuery),
    responses(
        (status = 200, description = "Daily, weekly, monthly and annual revenue from the anchor date", body = ApiResponse<RevenuePeriodResponse>),
        (status = 400, description = "Missing or malformed dates, or start_date after end_date", body = ErrorResponse),
        (status = 404, description = "Referenced product or category not found", body = ErrorResponse)
    )
)]
pub async fn get_revenue_periods(
    Extension(service): Extension<DynRevenueService>,
    SimpleValidatedQuery(params): SimpleValidatedQuery<RevenuePeriodQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.revenue_by_period(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn revenue_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/revenue", get(get_revenue))
        .route("/api/revenue/periods", get(get_revenue_periods))
        .layer(Extension(app_state.di_container.revenue.clone()))
}
