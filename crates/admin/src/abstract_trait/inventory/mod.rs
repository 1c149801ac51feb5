mod repository;
mod service;

pub use self::repository::{
    InventoryCommandRepositoryTrait, InventoryQueryRepositoryTrait, DynInventoryCommandRepository,
    DynInventoryQueryRepository,
};
pub use self::service::{
    InventoryCommandServiceTrait, InventoryQueryServiceTrait, DynInventoryCommandService, DynInventoryQueryService,
};
