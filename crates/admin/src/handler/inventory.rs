use crate::{
    abstract_trait::inventory::{DynInventoryCommandService, DynInventoryQueryService},
    domain::{
        requests::inventory::{FindAllInventory, UpdateInventoryRequest},
        response::inventory::InventoryResponse,
    },
    middleware::validate::{SimpleValidatedJson, SimpleValidatedQuery},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "Inventory",
    params(FindAllInventory),
    responses(
        (status = 200, description = "Inventory levels", body = ApiResponsePagination<Vec<InventoryResponse>>),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
pub async fn get_inventory_list(
    Extension(service): Extension<DynInventoryQueryService>,
    SimpleValidatedQuery(params): SimpleValidatedQuery<FindAllInventory>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/inventory/{product_id}",
    tag = "Inventory",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Inventory for the product", body = ApiResponse<InventoryResponse>),
        (status = 404, description = "No inventory record for the product", body = ErrorResponse)
    )
)]
pub async fn get_inventory(
    Extension(service): Extension<DynInventoryQueryService>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_product(product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/inventory/{product_id}",
    tag = "Inventory",
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = UpdateInventoryRequest,
    responses(
        (status = 200, description = "Stock updated", body = ApiResponse<InventoryResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_inventory(
    Extension(service): Extension<DynInventoryCommandService>,
    Path(product_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateInventoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_stock(product_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn inventory_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/inventory", get(get_inventory_list))
        .route("/api/inventory/{product_id}", get(get_inventory))
        .route("/api/inventory/{product_id}", put(update_inventory))
        .layer(Extension(app_state.di_container.inventory_query.clone()))
        .layer(Extension(app_state.di_container.inventory_command.clone()))
}
