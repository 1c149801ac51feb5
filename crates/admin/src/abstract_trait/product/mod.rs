mod repository;
mod service;

pub use self::repository::{
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, DynProductCommandRepository,
    DynProductQueryRepository,
};
pub use self::service::{
    ProductCommandServiceTrait, ProductQueryServiceTrait, DynProductCommandService, DynProductQueryService,
};
