use crate::{
    abstract_trait::sale::{DynSaleCommandService, DynSaleQueryService},
    domain::{
        requests::sale::{CreateSaleRequest, FindAllSales},
        response::sale::SaleResponse,
    },
    middleware::validate::{SimpleValidatedJson, SimpleValidatedQuery},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sale",
    params(FindAllSales),
    responses(
        (status = 200, description = "Matching sales, newest first", body = ApiResponsePagination<Vec<SaleResponse>>),
        (status = 400, description = "Malformed filter or inverted date range", body = ErrorResponse),
        (status = 404, description = "Referenced product or category not found", body = ErrorResponse)
    )
)]
pub async fn get_sales(
    Extension(service): Extension<DynSaleQueryService>,
    SimpleValidatedQuery(params): SimpleValidatedQuery<FindAllSales>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = "Sale",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale details", body = ApiResponse<SaleResponse>),
        (status = 404, description = "Sale not found", body = ErrorResponse)
    )
)]
pub async fn get_sale(
    Extension(service): Extension<DynSaleQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sale",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded", body = ApiResponse<SaleResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn create_sale(
    Extension(service): Extension<DynSaleCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSaleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_sale(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn sale_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/sales", get(get_sales))
        .route("/api/sales", post(create_sale))
        .route("/api/sales/{id}", get(get_sale))
        .layer(Extension(app_state.di_container.sale_query.clone()))
        .layer(Extension(app_state.di_container.sale_command.clone()))
}
