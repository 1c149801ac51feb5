mod repository;
mod service;

pub use self::repository::{
    SaleCommandRepositoryTrait, SaleQueryRepositoryTrait, DynSaleCommandRepository,
    DynSaleQueryRepository,
};
pub use self::service::{
    SaleCommandServiceTrait, SaleQueryServiceTrait, DynSaleCommandService, DynSaleQueryService,
};
