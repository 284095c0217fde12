//! Row model for the `categories` table.

use serde::Serialize;
use sqlx::FromRow;

use catalog_core::category::{Category, CategoryProps};
use catalog_core::error::CoreError;
use catalog_core::types::{CategoryId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CategoryRow {
    pub fn from_entity(entity: &Category) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            description: entity.description.clone(),
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Rebuild and validate the domain entity.
    ///
    /// A stored row that fails entity validation is a data-integrity fault
    /// of the store, not a caller error, so it surfaces as
    /// [`CoreError::Internal`].
    pub fn into_entity(self) -> Result<Category, CoreError> {
        let id = self.id;
        let mut entity = Category::restore(CategoryProps {
            id: self.id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        });
        entity.validate();
        if entity.notification.has_errors() {
            return Err(CoreError::Internal(format!(
                "stored category {id} failed validation"
            )));
        }
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use catalog_core::testing::CategoryBuilder;

    use super::*;

    #[test]
    fn maps_entity_to_row_and_back() {
        let entity = CategoryBuilder::new()
            .name("Movie")
            .description("general movies")
            .active()
            .build();

        let row = CategoryRow::from_entity(&entity);
        let rebuilt = row.into_entity().unwrap();

        assert_eq!(rebuilt, entity);
    }

    #[test]
    fn rejects_rows_that_fail_entity_validation() {
        let entity = CategoryBuilder::new().name("").build();
        let row = CategoryRow::from_entity(&entity);

        assert_matches!(row.into_entity(), Err(CoreError::Internal(_)));
    }
}
