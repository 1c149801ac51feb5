use crate::{
    abstract_trait::category::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
    domain::requests::{
        category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        search_term,
    },
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, domain::responses::Pagination, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(FromRow)]
struct CategoryRow {
    #[sqlx(flatten)]
    category: CategoryModel,
    total_count: i64,
}

#[derive(Clone)]
pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<(Vec<CategoryModel>, i64), RepositoryError> {
        info!("🔍 Fetching categories with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT
                c.category_id,
                c.name,
                c.created_at,
                c.updated_at,
                COUNT(*) OVER() AS total_count
            FROM categories c
            WHERE ($1::TEXT IS NULL OR c.name ILIKE '%' || $1 || '%')
            ORDER BY c.category_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_term(&req.search))
        .bind(req.page_size as i64)
        .bind(Pagination::offset(req.page, req.page_size))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let categories = rows.into_iter().map(|r| r.category).collect();

        Ok((categories, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError> {
        info!("🆔 Fetching category by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT category_id, name, created_at, updated_at
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch category {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(category)
    }
}

#[derive(Clone)]
pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        info!("🆕 Creating category: {}", req.name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (name, created_at, updated_at)
            VALUES ($1, NOW() AT TIME ZONE 'UTC', NOW() AT TIME ZONE 'UTC')
            RETURNING category_id, name, created_at, updated_at
            "#,
        )
        .bind(req.name.trim())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create category '{}': {:?}", req.name, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Category created with ID: {}", category.category_id);
        Ok(category)
    }

    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        info!("🔄 Updating category {} to '{}'", id, req.name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categories
            SET name = $2, updated_at = NOW() AT TIME ZONE 'UTC'
            WHERE category_id = $1
            RETURNING category_id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(req.name.trim())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update category {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Category {} updated", id);
        Ok(category)
    }
}
