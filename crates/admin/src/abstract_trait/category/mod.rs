mod repository;
mod service;

pub use self::repository::{
    CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait, DynCategoryCommandRepository,
    DynCategoryQueryRepository,
};
pub use self::service::{
    CategoryCommandServiceTrait, CategoryQueryServiceTrait, DynCategoryCommandService, DynCategoryQueryService,
};
