//! Category repository implementations.

pub mod category_repo;
pub mod in_memory;

pub use category_repo::PgCategoryRepository;
pub use in_memory::InMemoryCategoryRepository;
