//! Repository contract for the `Category` aggregate.

use async_trait::async_trait;

use crate::category::Category;
use crate::error::CoreError;
use crate::search::{SearchInput, SearchOutput};
use crate::types::CategoryId;

/// Fields a category search may sort by. Both stores honor the same
/// allow-list; a sort outside it leaves the order untouched.
pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "created_at", "updated_at"];

/// Storage operations every category store implements, whether backed by an
/// in-memory collection or a relational table.
///
/// `search` always runs filter, then sort, then pagination, in that order,
/// and reports `total` as the filtered (pre-pagination) count. `update` and
/// `delete` fail with [`CoreError::NotFound`] when the identity is absent;
/// `find_by_id` reports absence as `None`, never as an error.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, entity: Category) -> Result<(), CoreError>;

    async fn bulk_insert(&self, entities: Vec<Category>) -> Result<(), CoreError>;

    async fn update(&self, entity: Category) -> Result<(), CoreError>;

    async fn delete(&self, id: CategoryId) -> Result<(), CoreError>;

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CoreError>;

    /// Entire collection, unfiltered and unsorted, in storage order.
    async fn find_all(&self) -> Result<Vec<Category>, CoreError>;

    async fn search(&self, input: SearchInput) -> Result<SearchOutput<Category>, CoreError>;
}
