mod category;
mod inventory;
mod product;
mod revenue;
mod sale;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::category::category_routes;
pub use self::inventory::inventory_routes;
pub use self::product::product_routes;
pub use self::revenue::revenue_routes;
pub use self::sale::sale_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        revenue::get_revenue,
        revenue::get_revenue_periods,

        sale::get_sales,
        sale::get_sale,
        sale::create_sale,

        product::get_products,
        product::get_product,
        product::create_product,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,

        inventory::get_inventory_list,
        inventory::get_inventory,
        inventory::update_inventory,
    ),
    tags(
        (name = "Revenue", description = "Revenue aggregation endpoints"),
        (name = "Sale", description = "Sale endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Inventory", description = "Inventory endpoints"),
    )
)]
struct ApiDoc;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        error!("❌ Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("Failed to encode metrics: {e}"),
        );
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
}

pub struct AppRouter;

impl AppRouter {
    /// Full application router: API routes, `/metrics` and Swagger UI.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(revenue_routes(shared_state.clone()))
            .merge(sale_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(inventory_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        let local_addr = listener.local_addr()?;
        info!("🚀 Server running on http://{local_addr}");
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")?;

        Ok(())
    }
}
