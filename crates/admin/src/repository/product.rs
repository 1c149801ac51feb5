use crate::{
    abstract_trait::product::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    domain::requests::{
        product::{CreateProductRequest, FindAllProducts},
        search_term,
    },
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, domain::responses::Pagination, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(FromRow)]
struct ProductRow {
    #[sqlx(flatten)]
    product: ProductModel,
    total_count: i64,
}

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching products with search: {:?}, category: {:?}",
            req.search, req.category_id
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                p.product_id,
                p.category_id,
                p.name,
                p.description,
                p.price,
                p.created_at,
                p.updated_at,
                COUNT(*) OVER() AS total_count
            FROM products p
            WHERE ($1::TEXT IS NULL OR p.name ILIKE '%' || $1 || '%')
              AND ($2::INT IS NULL OR p.category_id = $2)
            ORDER BY p.created_at DESC, p.product_id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(search_term(&req.search))
        .bind(req.category_id)
        .bind(req.page_size as i64)
        .bind(Pagination::offset(req.page, req.page_size))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(|r| r.product).collect();

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, category_id, name, description, price, created_at, updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }
}

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        info!("🆕 Creating product: {} in category {}", req.name, req.category_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (category_id, name, description, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW() AT TIME ZONE 'UTC', NOW() AT TIME ZONE 'UTC')
            RETURNING product_id, category_id, name, description, price, created_at, updated_at
            "#,
        )
        .bind(req.category_id)
        .bind(req.name.trim())
        .bind(&req.description)
        .bind(req.price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product '{}': {:?}", req.name, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Product created with ID: {}", product.product_id);
        Ok(product)
    }
}
