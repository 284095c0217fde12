//! In-memory category repository, used by fast unit tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::category::Category;
use catalog_core::error::CoreError;
use catalog_core::repository::{CategoryRepository, CATEGORY_SORTABLE_FIELDS};
use catalog_core::search::{
    apply_filter, apply_pagination, apply_sort, SearchInput, SearchOutput, SortDirection,
    SortValue,
};
use catalog_core::types::CategoryId;

/// Vec-backed store implementing the full repository contract. The lock
/// only satisfies the shared-state requirements of the async stack; every
/// operation runs to completion before the next begins.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    items: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_value(category: &Category, field: &str) -> Option<SortValue> {
    match field {
        "name" => Some(SortValue::Text(category.name.clone())),
        "created_at" => Some(SortValue::Time(category.created_at)),
        "updated_at" => Some(SortValue::Time(category.updated_at)),
        _ => None,
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, entity: Category) -> Result<(), CoreError> {
        self.items.write().await.push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<Category>) -> Result<(), CoreError> {
        self.items.write().await.extend(entities);
        Ok(())
    }

    async fn update(&self, entity: Category) -> Result<(), CoreError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.id == entity.id) {
            Some(stored) => {
                *stored = entity;
                Ok(())
            }
            None => Err(CoreError::not_found("Category", entity.id)),
        }
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CoreError> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(())
            }
            None => Err(CoreError::not_found("Category", id)),
        }
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CoreError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, CoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn search(&self, input: SearchInput) -> Result<SearchOutput<Category>, CoreError> {
        let items = self.items.read().await.clone();

        let filtered = apply_filter(items, input.filter.as_deref(), |category, filter| {
            category.name.to_lowercase().contains(&filter.to_lowercase())
        });
        let total = filtered.len() as i64;

        // Unsorted listings default to newest-first; an explicit sort goes
        // through the shared allow-listed pipeline untouched.
        let sorted = match input.sort.as_deref() {
            Some(field) => apply_sort(
                filtered,
                Some(field),
                input.sort_dir,
                CATEGORY_SORTABLE_FIELDS,
                sort_value,
            ),
            None => apply_sort(
                filtered,
                Some("created_at"),
                Some(SortDirection::Desc),
                CATEGORY_SORTABLE_FIELDS,
                sort_value,
            ),
        };

        let page = apply_pagination(sorted, input.page, input.per_page);
        Ok(SearchOutput::new(page, total, input.page, input.per_page))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    use catalog_core::category::CreateCategory;
    use catalog_core::search::SearchInputProps;
    use catalog_core::testing::CategoryBuilder;

    use super::*;

    fn search_input(props: SearchInputProps) -> SearchInput {
        SearchInput::new(props)
    }

    #[tokio::test]
    async fn insert_then_find_by_id_round_trips() {
        let repo = InMemoryCategoryRepository::new();
        let entity = Category::create(CreateCategory {
            name: "Movie".into(),
            description: None,
            is_active: None,
        });

        repo.insert(entity.clone()).await.unwrap();
        let found = repo.find_by_id(entity.id).await.unwrap().unwrap();

        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            serde_json::to_value(&entity).unwrap()
        );
    }

    #[tokio::test]
    async fn find_by_id_is_idempotent() {
        let repo = InMemoryCategoryRepository::new();
        let entity = CategoryBuilder::new().build();
        repo.insert(entity.clone()).await.unwrap();

        let first = repo.find_by_id(entity.id).await.unwrap();
        let second = repo.find_by_id(entity.id).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_ids() {
        let repo = InMemoryCategoryRepository::new();
        assert_eq!(repo.find_by_id(CategoryId::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_all_returns_storage_order() {
        let repo = InMemoryCategoryRepository::new();
        let a = CategoryBuilder::new().name("A").build();
        let b = CategoryBuilder::new().name("B").build();
        repo.bulk_insert(vec![a.clone(), b.clone()]).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn update_replaces_the_stored_entity() {
        let repo = InMemoryCategoryRepository::new();
        let mut entity = CategoryBuilder::new().name("Movie").build();
        repo.insert(entity.clone()).await.unwrap();

        entity.change_name("Documentary");
        repo.update(entity.clone()).await.unwrap();

        let found = repo.find_by_id(entity.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Documentary");
    }

    #[tokio::test]
    async fn update_of_an_unknown_entity_fails_without_mutating_the_store() {
        let repo = InMemoryCategoryRepository::new();
        let stored = CategoryBuilder::new().name("Kept").build();
        repo.insert(stored.clone()).await.unwrap();

        let ghost = CategoryBuilder::new().name("Ghost").build();
        let err = repo.update(ghost).await.unwrap_err();

        assert_matches!(err, CoreError::NotFound { entity: "Category", .. });
        assert_eq!(repo.find_all().await.unwrap(), vec![stored]);
    }

    #[tokio::test]
    async fn delete_removes_the_entity() {
        let repo = InMemoryCategoryRepository::new();
        let entity = CategoryBuilder::new().build();
        repo.insert(entity.clone()).await.unwrap();

        repo.delete(entity.id).await.unwrap();
        assert_eq!(repo.find_by_id(entity.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_of_an_unknown_id_fails() {
        let repo = InMemoryCategoryRepository::new();
        let id = CategoryId::new_v4();

        let err = repo.delete(id).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Category", .. });
        assert_eq!(err.to_string(), format!("Category with id {id} not found"));
    }

    #[tokio::test]
    async fn search_filters_by_name_substring_case_insensitively() {
        let repo = InMemoryCategoryRepository::new();
        repo.bulk_insert(vec![
            CategoryBuilder::new().name("Movies").build(),
            CategoryBuilder::new().name("Music").build(),
            CategoryBuilder::new().name("Games").build(),
        ])
        .await
        .unwrap();

        let out = repo
            .search(search_input(SearchInputProps {
                filter: Some("Mu".into()),
                ..Default::default()
            }))
            .await
            .unwrap();

        assert_eq!(out.total, 1);
        assert_eq!(out.items[0].name, "Music");
    }

    #[tokio::test]
    async fn search_sorts_and_paginates() {
        let repo = InMemoryCategoryRepository::new();
        repo.bulk_insert(vec![
            CategoryBuilder::new().name("Zeta").build(),
            CategoryBuilder::new().name("Alpha").build(),
            CategoryBuilder::new().name("Beta").build(),
        ])
        .await
        .unwrap();

        let out = repo
            .search(search_input(SearchInputProps {
                sort: Some("name".into()),
                sort_dir: Some("asc".into()),
                per_page: Some("2".into()),
                page: Some("1".into()),
                ..Default::default()
            }))
            .await
            .unwrap();

        let names: Vec<_> = out.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(out.total, 3);
        assert_eq!(out.last_page, 2);
    }

    #[tokio::test]
    async fn search_defaults_to_newest_first_when_unsorted() {
        let repo = InMemoryCategoryRepository::new();
        let base = Utc::now();
        repo.bulk_insert(vec![
            CategoryBuilder::new()
                .name("Oldest")
                .created_at(base - Duration::seconds(2))
                .build(),
            CategoryBuilder::new()
                .name("Newest")
                .created_at(base)
                .build(),
            CategoryBuilder::new()
                .name("Middle")
                .created_at(base - Duration::seconds(1))
                .build(),
        ])
        .await
        .unwrap();

        let out = repo.search(SearchInput::default()).await.unwrap();

        let names: Vec<_> = out.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
    }

    #[tokio::test]
    async fn search_out_of_range_page_is_empty_not_an_error() {
        let repo = InMemoryCategoryRepository::new();
        repo.insert(CategoryBuilder::new().build()).await.unwrap();

        let out = repo
            .search(search_input(SearchInputProps {
                page: Some("5".into()),
                ..Default::default()
            }))
            .await
            .unwrap();

        assert!(out.items.is_empty());
        assert_eq!(out.total, 1);
        assert_eq!(out.current_page, 5);
    }
}
