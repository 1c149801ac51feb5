use crate::{
    abstract_trait::category::{DynCategoryCommandService, DynCategoryQueryService},
    domain::{
        requests::category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        response::category::CategoryResponse,
    },
    middleware::validate::{SimpleValidatedJson, SimpleValidatedQuery},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Category",
    params(FindAllCategories),
    responses(
        (status = 200, description = "List of categories", body = ApiResponsePagination<Vec<CategoryResponse>>),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryQueryService>,
    SimpleValidatedQuery(params): SimpleValidatedQuery<FindAllCategories>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Category name already taken", body = ErrorResponse)
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category name already taken", body = ErrorResponse)
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_category(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories", post(create_category))
        .route("/api/categories/{id}", get(get_category))
        .route("/api/categories/{id}", put(update_category))
        .layer(Extension(app_state.di_container.category_query.clone()))
        .layer(Extension(app_state.di_container.category_command.clone()))
}
