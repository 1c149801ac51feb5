use crate::{
    abstract_trait::sale::{SaleCommandRepositoryTrait, SaleQueryRepositoryTrait},
    domain::requests::sale::RecordSale,
    model::Sale as SaleModel,
    revenue::SaleFilter,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, domain::responses::Pagination, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(FromRow)]
struct SaleRow {
    #[sqlx(flatten)]
    sale: SaleModel,
    total_count: i64,
}

#[derive(Clone)]
pub struct SaleQueryRepository {
    db: ConnectionPool,
}

impl SaleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleQueryRepositoryTrait for SaleQueryRepository {
    async fn find_all(
        &self,
        filter: &SaleFilter,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<SaleModel>, i64), RepositoryError> {
        info!("🔍 Fetching sales page {} with filter {:?}", page, filter);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT
                s.sale_id,
                s.product_id,
                s.category_id,
                s.quantity,
                s.unit_price,
                s.sale_date,
                s.created_at,
                COUNT(*) OVER() AS total_count
            FROM sales s
            WHERE ($1::TIMESTAMP IS NULL OR s.sale_date >= $1)
              AND ($2::TIMESTAMP IS NULL OR s.sale_date <= $2)
              AND ($3::INT IS NULL OR s.product_id = $3)
              AND ($4::INT IS NULL OR s.category_id = $4)
            ORDER BY s.sale_date DESC, s.sale_id DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(filter.start_date())
        .bind(filter.end_date())
        .bind(filter.product_id())
        .bind(filter.category_id())
        .bind(page_size as i64)
        .bind(Pagination::offset(page, page_size))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sales: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let sales = rows.into_iter().map(|r| r.sale).collect();

        Ok((sales, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SaleModel>, RepositoryError> {
        info!("🆔 Fetching sale by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sale = sqlx::query_as::<_, SaleModel>(
            r#"
            SELECT sale_id, product_id, category_id, quantity, unit_price, sale_date, created_at
            FROM sales
            WHERE sale_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sale {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(sale)
    }

    async fn find_matching(&self, filter: &SaleFilter) -> Result<Vec<SaleModel>, RepositoryError> {
        info!("📊 Loading sales for aggregation with filter {:?}", filter);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sales = sqlx::query_as::<_, SaleModel>(
            r#"
            SELECT sale_id, product_id, category_id, quantity, unit_price, sale_date, created_at
            FROM sales
            WHERE ($1::TIMESTAMP IS NULL OR sale_date >= $1)
              AND ($2::TIMESTAMP IS NULL OR sale_date <= $2)
              AND ($3::INT IS NULL OR product_id = $3)
              AND ($4::INT IS NULL OR category_id = $4)
            ORDER BY sale_date, sale_id
            "#,
        )
        .bind(filter.start_date())
        .bind(filter.end_date())
        .bind(filter.product_id())
        .bind(filter.category_id())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to load sales for aggregation: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Loaded {} sales", sales.len());
        Ok(sales)
    }
}

#[derive(Clone)]
pub struct SaleCommandRepository {
    db: ConnectionPool,
}

impl SaleCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for SaleCommandRepository {
    async fn create_sale(&self, sale: &RecordSale) -> Result<SaleModel, RepositoryError> {
        info!(
            "🧾 Recording sale of {} x product {} at {}",
            sale.quantity, sale.product_id, sale.unit_price
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let created = sqlx::query_as::<_, SaleModel>(
            r#"
            INSERT INTO sales (product_id, category_id, quantity, unit_price, sale_date, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW() AT TIME ZONE 'UTC')
            RETURNING sale_id, product_id, category_id, quantity, unit_price, sale_date, created_at
            "#,
        )
        .bind(sale.product_id)
        .bind(sale.category_id)
        .bind(sale.quantity)
        .bind(sale.unit_price)
        .bind(sale.sale_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to record sale for product {}: {:?}", sale.product_id, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Sale recorded with ID: {}", created.sale_id);
        Ok(created)
    }
}
