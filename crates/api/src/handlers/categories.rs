//! Handlers for the category resource.
//!
//! Each handler orchestrates one use case: load or construct the entity,
//! mutate and validate it, and delegate storage to the repository. An
//! entity whose notification has errors is never persisted.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::category::{Category, CreateCategory, UpdateCategory};
use catalog_core::error::CoreError;
use catalog_core::types::parse_category_id;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// POST /api/v1/categories
///
/// Create a category. Rejects with 422 when the name violates its
/// invariants.
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = Category::create(input);
    if category.notification.has_errors() {
        return Err(CoreError::EntityValidation(category.notification).into());
    }

    state.repo.insert(category.clone()).await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories
///
/// Paginated, filtered, sorted listing.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let output = state.repo.search(params.into_search_input()).await?;
    Ok(Json(Paginated::from(output)))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_category_id(&id)?;
    let category = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Category", id))?;

    Ok(Json(DataResponse { data: category }))
}

/// PATCH /api/v1/categories/{id}
///
/// Apply only the provided fields, then persist. Rejects with 422 when a
/// rename violates the name invariants; the stored entity is untouched in
/// that case.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let id = parse_category_id(&id)?;
    let mut category = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Category", id))?;

    if let Some(name) = input.name {
        category.change_name(name);
    }
    if let Some(description) = input.description {
        category.change_description(Some(description));
    }
    if let Some(is_active) = input.is_active {
        if is_active {
            category.activate();
        } else {
            category.deactivate();
        }
    }

    if category.notification.has_errors() {
        return Err(CoreError::EntityValidation(category.notification).into());
    }

    state.repo.update(category.clone()).await?;

    tracing::info!(category_id = %category.id, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_category_id(&id)?;
    state.repo.delete(id).await?;

    tracing::info!(category_id = %id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
