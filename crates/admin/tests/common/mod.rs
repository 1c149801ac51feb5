#![allow(dead_code)]

use admin::{
    abstract_trait::{
        category::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
        inventory::{InventoryCommandRepositoryTrait, InventoryQueryRepositoryTrait},
        product::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        sale::{SaleCommandRepositoryTrait, SaleQueryRepositoryTrait},
    },
    di::Repositories,
    domain::requests::{
        category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        inventory::FindAllInventory,
        product::{CreateProductRequest, FindAllProducts},
        sale::RecordSale,
    },
    handler::AppRouter,
    model::{Category, Inventory, Product, Sale},
    revenue::SaleFilter,
    state::AppState,
};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use reqwest::StatusCode;
use serde_json::{Value, json};
use shared::{domain::responses::Pagination, errors::RepositoryError};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    products: Vec<Product>,
    inventory: Vec<Inventory>,
    sales: Vec<Sale>,
}

/// Storage double with the same observable behavior as the Postgres
/// repositories, including unique-name conflicts.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn page_of<T: Clone>(rows: &[T], page: i32, page_size: i32) -> Vec<T> {
    rows.iter()
        .skip(Pagination::offset(page, page_size) as usize)
        .take(page_size.max(1) as usize)
        .cloned()
        .collect()
}

fn matches_search(name: &str, search: &str) -> bool {
    let search = search.trim();
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

impl MemoryStore {
    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<(Vec<Category>, i64), RepositoryError> {
        let tables = self.tables();
        let rows: Vec<Category> = tables
            .categories
            .iter()
            .filter(|c| matches_search(&c.name, &req.search))
            .cloned()
            .collect();
        Ok((page_of(&rows, req.page, req.page_size), rows.len() as i64))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        Ok(self
            .tables()
            .categories
            .iter()
            .find(|c| c.category_id == id)
            .cloned())
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for MemoryStore {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut tables = self.tables();
        let name = req.name.trim().to_string();
        if tables.categories.iter().any(|c| c.name == name) {
            return Err(RepositoryError::AlreadyExists("categories_name_key".into()));
        }

        let category = Category {
            category_id: tables.categories.len() as i32 + 1,
            name,
            created_at: now(),
            updated_at: now(),
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut tables = self.tables();
        let name = req.name.trim().to_string();
        if tables
            .categories
            .iter()
            .any(|c| c.name == name && c.category_id != id)
        {
            return Err(RepositoryError::AlreadyExists("categories_name_key".into()));
        }

        let category = tables
            .categories
            .iter_mut()
            .find(|c| c.category_id == id)
            .ok_or(RepositoryError::NotFound)?;
        category.name = name;
        category.updated_at = now();
        Ok(category.clone())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let tables = self.tables();
        let mut rows: Vec<Product> = tables
            .products
            .iter()
            .filter(|p| matches_search(&p.name, &req.search))
            .filter(|p| req.category_id.is_none_or(|id| p.category_id == id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.product_id.cmp(&a.product_id));
        Ok((page_of(&rows, req.page, req.page_size), rows.len() as i64))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .tables()
            .products
            .iter()
            .find(|p| p.product_id == id)
            .cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut tables = self.tables();
        if !tables
            .categories
            .iter()
            .any(|c| c.category_id == req.category_id)
        {
            return Err(RepositoryError::ForeignKey("products_category_id_fkey".into()));
        }

        let product = Product {
            product_id: tables.products.len() as i32 + 1,
            category_id: req.category_id,
            name: req.name.trim().to_string(),
            description: req.description.clone(),
            price: req.price,
            created_at: now(),
            updated_at: now(),
        };
        tables.products.push(product.clone());
        Ok(product)
    }
}

#[async_trait]
impl InventoryQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<(Vec<Inventory>, i64), RepositoryError> {
        let tables = self.tables();
        let mut rows: Vec<Inventory> = tables
            .inventory
            .iter()
            .filter(|i| {
                req.low_stock_threshold
                    .is_none_or(|threshold| i.stock_quantity <= threshold)
            })
            .cloned()
            .collect();
        rows.sort_by_key(|i| (i.stock_quantity, i.product_id));
        Ok((page_of(&rows, req.page, req.page_size), rows.len() as i64))
    }

    async fn find_by_product(&self, product_id: i32) -> Result<Option<Inventory>, RepositoryError> {
        Ok(self
            .tables()
            .inventory
            .iter()
            .find(|i| i.product_id == product_id)
            .cloned())
    }
}

#[async_trait]
impl InventoryCommandRepositoryTrait for MemoryStore {
    async fn upsert_stock(
        &self,
        product_id: i32,
        stock_quantity: i32,
    ) -> Result<Inventory, RepositoryError> {
        let mut tables = self.tables();
        let next_id = tables.inventory.len() as i32 + 1;

        if let Some(record) = tables
            .inventory
            .iter_mut()
            .find(|i| i.product_id == product_id)
        {
            record.stock_quantity = stock_quantity;
            record.last_updated = now();
            return Ok(record.clone());
        }

        let record = Inventory {
            inventory_id: next_id,
            product_id,
            stock_quantity,
            last_updated: now(),
        };
        tables.inventory.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl SaleQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        filter: &SaleFilter,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<Sale>, i64), RepositoryError> {
        let tables = self.tables();
        let mut rows: Vec<Sale> = tables
            .sales
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.sale_date
                .cmp(&a.sale_date)
                .then(b.sale_id.cmp(&a.sale_id))
        });
        Ok((page_of(&rows, page, page_size), rows.len() as i64))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Sale>, RepositoryError> {
        Ok(self.tables().sales.iter().find(|s| s.sale_id == id).cloned())
    }

    async fn find_matching(&self, filter: &SaleFilter) -> Result<Vec<Sale>, RepositoryError> {
        Ok(self
            .tables()
            .sales
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for MemoryStore {
    async fn create_sale(&self, sale: &RecordSale) -> Result<Sale, RepositoryError> {
        let mut tables = self.tables();
        let created = Sale {
            sale_id: tables.sales.len() as i32 + 1,
            product_id: sale.product_id,
            category_id: sale.category_id,
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            sale_date: sale.sale_date,
            created_at: now(),
        };
        tables.sales.push(created.clone());
        Ok(created)
    }
}

pub fn memory_repositories() -> Repositories {
    let store = Arc::new(MemoryStore::default());
    Repositories {
        category_query: store.clone(),
        category_command: store.clone(),
        product_query: store.clone(),
        product_command: store.clone(),
        inventory_query: store.clone(),
        inventory_command: store.clone(),
        sale_query: store.clone(),
        sale_command: store,
    }
}

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Production router over in-memory storage on an ephemeral port.
    pub async fn spawn() -> Self {
        let app = AppRouter::build(AppState::from_repositories(memory_repositories()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.get(self.url(path)).send().await.unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    pub async fn create_category(&self, name: &str) -> i64 {
        let (status, body) = self.post("/api/categories", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }

    pub async fn create_product(&self, category_id: i64, name: &str, price: i64) -> i64 {
        let (status, body) = self
            .post(
                "/api/products",
                json!({ "category_id": category_id, "name": name, "price": price }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }

    pub async fn record_sale(&self, product_id: i64, quantity: i64, sale_date: &str) -> Value {
        let (status, body) = self
            .post(
                "/api/sales",
                json!({ "product_id": product_id, "quantity": quantity, "sale_date": sale_date }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"].clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
