//! The `Category` aggregate root.
//!
//! A mutable record with identity, name, optional description, active flag,
//! and two timestamps. Validation never throws: violations land in the
//! entity's own [`Notification`], and callers check `has_errors()` before
//! persisting. The entity may transiently hold an invalid name (e.g. after
//! a rejected rename); the notification is the source of truth.

use chrono::{SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::notification::Notification;
use crate::types::{CategoryId, Timestamp};
use crate::validation::validate_name;

/// Current instant at microsecond precision, the resolution the storage
/// layer round-trips.
fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Command for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Command for partially updating an existing category. Only non-`None`
/// fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Full field set for rebuilding an entity from a stored row.
#[derive(Debug, Clone)]
pub struct CategoryProps {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    #[serde(rename = "category_id")]
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip)]
    pub notification: Notification,
}

impl Category {
    /// Factory for new categories. Generates the identity, stamps both
    /// timestamps with the same instant, and validates the name.
    pub fn create(input: CreateCategory) -> Self {
        let now = now();
        let mut category = Self {
            id: CategoryId::new_v4(),
            name: input.name,
            description: input.description,
            is_active: input.is_active.unwrap_or(false),
            created_at: now,
            updated_at: now,
            notification: Notification::new(),
        };
        category.validate();
        category
    }

    /// Rebuild an entity from stored field values, without validating.
    /// Storage mappers call [`Category::validate`] separately and treat
    /// failures as data-integrity errors.
    pub fn restore(props: CategoryProps) -> Self {
        Self {
            id: props.id,
            name: props.name,
            description: props.description,
            is_active: props.is_active,
            created_at: props.created_at,
            updated_at: props.updated_at,
            notification: Notification::new(),
        }
    }

    /// Rename the category. Re-validates the name only.
    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = now();
        self.validate();
    }

    /// Replace the description. Cannot affect the name invariant, so no
    /// re-validation happens.
    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = now();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = now();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = now();
    }

    /// Run the name validators against the current field values, recording
    /// violations in the attached notification. Does not mutate fields and
    /// does not fail.
    pub fn validate(&mut self) {
        let mut notification = std::mem::take(&mut self.notification);
        validate_name(&self.name, &mut notification);
        self.notification = notification;
    }
}
