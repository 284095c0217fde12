//! PostgreSQL repository for the `categories` table.

use async_trait::async_trait;

use catalog_core::category::Category;
use catalog_core::error::CoreError;
use catalog_core::repository::{CategoryRepository, CATEGORY_SORTABLE_FIELDS};
use catalog_core::search::{SearchInput, SearchOutput, SortDirection};
use catalog_core::types::CategoryId;

use crate::models::category::CategoryRow;
use crate::DbPool;

/// Column list for the `categories` table.
const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// sqlx-backed store implementing the same contract as the in-memory
/// repository. Filter, sort, and pagination are pushed down to the query
/// engine; each operation runs in its own statement scope with no
/// cross-operation transactional guarantees.
pub struct PgCategoryRepository {
    pool: DbPool,
}

impl PgCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn db_err(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}

/// ORDER BY clause for a search. The sort field is checked against the
/// allow-list before interpolation; anything else falls back to the
/// newest-first default.
fn order_by(input: &SearchInput) -> String {
    match input.sort.as_deref() {
        Some(field) if CATEGORY_SORTABLE_FIELDS.contains(&field) => {
            let dir = match input.sort_dir {
                Some(SortDirection::Desc) => "DESC",
                _ => "ASC",
            };
            format!("{field} {dir}")
        }
        _ => "created_at DESC".to_string(),
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn insert(&self, entity: Category) -> Result<(), CoreError> {
        let row = CategoryRow::from_entity(&entity);
        sqlx::query(
            "INSERT INTO categories (id, name, description, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.description)
        .bind(row.is_active)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<Category>) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;
        for entity in &entities {
            let row = CategoryRow::from_entity(entity);
            sqlx::query(
                "INSERT INTO categories (id, name, description, is_active, created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.description)
            .bind(row.is_active)
            .bind(row.created_at)
            .bind(row.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        }
        tx.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn update(&self, entity: Category) -> Result<(), CoreError> {
        // Existence check and write run as separate statements with no
        // shared transaction; a delete racing between them affects zero
        // rows and is not reported.
        let existing = self.find_by_id(entity.id).await?;
        if existing.is_none() {
            return Err(CoreError::not_found("Category", entity.id));
        }

        let row = CategoryRow::from_entity(&entity);
        sqlx::query(
            "UPDATE categories SET \
                name = $2, description = $3, is_active = $4, updated_at = $5 \
             WHERE id = $1",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.description)
        .bind(row.is_active)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found("Category", id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(CategoryRow::into_entity).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM categories");
        let rows = sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.into_iter().map(CategoryRow::into_entity).collect()
    }

    async fn search(&self, input: SearchInput) -> Result<SearchOutput<Category>, CoreError> {
        let order_by = order_by(&input);
        let offset = (input.page - 1) * input.per_page;

        let (total, rows) = match &input.filter {
            Some(filter) => {
                let pattern = format!("%{filter}%");
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE name ILIKE $1")
                        .bind(&pattern)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(db_err)?;

                let query = format!(
                    "SELECT {COLUMNS} FROM categories WHERE name ILIKE $1 \
                     ORDER BY {order_by} LIMIT $2 OFFSET $3"
                );
                let rows = sqlx::query_as::<_, CategoryRow>(&query)
                    .bind(&pattern)
                    .bind(input.per_page)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(db_err)?;
                (total, rows)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(db_err)?;

                let query = format!(
                    "SELECT {COLUMNS} FROM categories ORDER BY {order_by} LIMIT $1 OFFSET $2"
                );
                let rows = sqlx::query_as::<_, CategoryRow>(&query)
                    .bind(input.per_page)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(db_err)?;
                (total, rows)
            }
        };

        let items = rows
            .into_iter()
            .map(CategoryRow::into_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchOutput::new(items, total, input.page, input.per_page))
    }
}
