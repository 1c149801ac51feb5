use crate::{
    abstract_trait::{
        category::{
            DynCategoryCommandRepository, DynCategoryCommandService, DynCategoryQueryRepository,
            DynCategoryQueryService,
        },
        inventory::{
            DynInventoryCommandRepository, DynInventoryCommandService,
            DynInventoryQueryRepository, DynInventoryQueryService,
        },
        product::{
            DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
            DynProductQueryService,
        },
        revenue::DynRevenueService,
        sale::{
            DynSaleCommandRepository, DynSaleCommandService, DynSaleQueryRepository,
            DynSaleQueryService,
        },
    },
    repository::{
        CategoryCommandRepository, CategoryQueryRepository, InventoryCommandRepository,
        InventoryQueryRepository, ProductCommandRepository, ProductQueryRepository,
        SaleCommandRepository, SaleQueryRepository,
    },
    service::{
        CategoryCommandService, CategoryQueryService, FilterReferences, InventoryCommandService,
        InventoryQueryService, ProductCommandService, ProductQueryService, RevenueService,
        SaleCommandService, SaleQueryService,
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

/// Storage seams the services are built on.
#[derive(Clone)]
pub struct Repositories {
    pub category_query: DynCategoryQueryRepository,
    pub category_command: DynCategoryCommandRepository,
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub inventory_query: DynInventoryQueryRepository,
    pub inventory_command: DynInventoryCommandRepository,
    pub sale_query: DynSaleQueryRepository,
    pub sale_command: DynSaleCommandRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            category_query: Arc::new(CategoryQueryRepository::new(pool.clone())),
            category_command: Arc::new(CategoryCommandRepository::new(pool.clone())),
            product_query: Arc::new(ProductQueryRepository::new(pool.clone())),
            product_command: Arc::new(ProductCommandRepository::new(pool.clone())),
            inventory_query: Arc::new(InventoryQueryRepository::new(pool.clone())),
            inventory_command: Arc::new(InventoryCommandRepository::new(pool.clone())),
            sale_query: Arc::new(SaleQueryRepository::new(pool.clone())),
            sale_command: Arc::new(SaleCommandRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub category_query: DynCategoryQueryService,
    pub category_command: DynCategoryCommandService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub inventory_query: DynInventoryQueryService,
    pub inventory_command: DynInventoryCommandService,
    pub sale_query: DynSaleQueryService,
    pub sale_command: DynSaleCommandService,
    pub revenue: DynRevenueService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("category_query", &"CategoryQueryService")
            .field("category_command", &"CategoryCommandService")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("inventory_query", &"InventoryQueryService")
            .field("inventory_command", &"InventoryCommandService")
            .field("sale_query", &"SaleQueryService")
            .field("sale_command", &"SaleCommandService")
            .field("revenue", &"RevenueService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        Self::from_repositories(Repositories::postgres(pool), registry)
    }

    pub fn from_repositories(repos: Repositories, registry: &mut Registry) -> Self {
        let references =
            FilterReferences::new(repos.product_query.clone(), repos.category_query.clone());

        let category_query = CategoryQueryService::new(repos.category_query.clone(), registry);
        let category_command =
            CategoryCommandService::new(repos.category_command.clone(), registry);

        let product_query = ProductQueryService::new(repos.product_query.clone(), registry);
        let product_command = ProductCommandService::new(
            repos.product_command.clone(),
            repos.category_query.clone(),
            registry,
        );

        let inventory_query = InventoryQueryService::new(repos.inventory_query.clone(), registry);
        let inventory_command = InventoryCommandService::new(
            repos.inventory_command.clone(),
            repos.product_query.clone(),
            registry,
        );

        let sale_query =
            SaleQueryService::new(repos.sale_query.clone(), references.clone(), registry);
        let sale_command = SaleCommandService::new(
            repos.sale_command.clone(),
            repos.product_query.clone(),
            registry,
        );

        let revenue = RevenueService::new(repos.sale_query.clone(), references, registry);

        Self {
            category_query: Arc::new(category_query),
            category_command: Arc::new(category_command),
            product_query: Arc::new(product_query),
            product_command: Arc::new(product_command),
            inventory_query: Arc::new(inventory_query),
            inventory_command: Arc::new(inventory_command),
            sale_query: Arc::new(sale_query),
            sale_command: Arc::new(sale_command),
            revenue: Arc::new(revenue),
        }
    }
}
