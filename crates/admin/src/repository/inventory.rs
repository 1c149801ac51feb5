use crate::{
    abstract_trait::inventory::{InventoryCommandRepositoryTrait, InventoryQueryRepositoryTrait},
    domain::requests::inventory::FindAllInventory,
    model::Inventory as InventoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, domain::responses::Pagination, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(FromRow)]
struct InventoryRow {
    #[sqlx(flatten)]
    inventory: InventoryModel,
    total_count: i64,
}

#[derive(Clone)]
pub struct InventoryQueryRepository {
    db: ConnectionPool,
}

impl InventoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryQueryRepositoryTrait for InventoryQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<(Vec<InventoryModel>, i64), RepositoryError> {
        info!(
            "📦 Fetching inventory, low stock threshold: {:?}",
            req.low_stock_threshold
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT
                i.inventory_id,
                i.product_id,
                i.stock_quantity,
                i.last_updated,
                COUNT(*) OVER() AS total_count
            FROM inventory i
            WHERE ($1::INT IS NULL OR i.stock_quantity <= $1)
            ORDER BY i.stock_quantity ASC, i.product_id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(req.low_stock_threshold)
        .bind(req.page_size as i64)
        .bind(Pagination::offset(req.page, req.page_size))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch inventory: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let records = rows.into_iter().map(|r| r.inventory).collect();

        Ok((records, total))
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Option<InventoryModel>, RepositoryError> {
        info!("📦 Fetching inventory for product {}", product_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let record = sqlx::query_as::<_, InventoryModel>(
            r#"
            SELECT inventory_id, product_id, stock_quantity, last_updated
            FROM inventory
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch inventory for product {}: {:?}", product_id, e);
            RepositoryError::from(e)
        })?;

        Ok(record)
    }
}

#[derive(Clone)]
pub struct InventoryCommandRepository {
    db: ConnectionPool,
}

impl InventoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryCommandRepositoryTrait for InventoryCommandRepository {
    async fn upsert_stock(
        &self,
        product_id: i32,
        stock_quantity: i32,
    ) -> Result<InventoryModel, RepositoryError> {
        info!(
            "🔄 Setting stock of product {} to {}",
            product_id, stock_quantity
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let record = sqlx::query_as::<_, InventoryModel>(
            r#"
            INSERT INTO inventory (product_id, stock_quantity, last_updated)
            VALUES ($1, $2, NOW() AT TIME ZONE 'UTC')
            ON CONFLICT (product_id) DO UPDATE
            SET stock_quantity = EXCLUDED.stock_quantity,
                last_updated = EXCLUDED.last_updated
            RETURNING inventory_id, product_id, stock_quantity, last_updated
            "#,
        )
        .bind(product_id)
        .bind(stock_quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to upsert inventory for product {}: {:?}", product_id, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Inventory {} now holds {}", record.inventory_id, record.stock_quantity);
        Ok(record)
    }
}
