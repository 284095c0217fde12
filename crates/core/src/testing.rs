//! Test fixture support: a plain configuration builder for categories.
//!
//! Defaults are deterministic; tests that want random data inject an
//! explicit [`rand::Rng`] source so runs stay reproducible.

use chrono::{SubsecRound, Utc};
use rand::Rng;

use crate::category::{Category, CategoryProps};
use crate::types::{CategoryId, Timestamp};

/// Random lowercase name of the given length, drawn from the injected
/// source.
pub fn random_name<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// Builder for test categories. Unset fields fall back to fixed defaults
/// (`name = "Movie"`, inactive, fresh id, current timestamps).
#[derive(Debug, Default)]
pub struct CategoryBuilder {
    id: Option<CategoryId>,
    name: Option<String>,
    description: Option<String>,
    is_active: bool,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn created_at(mut self, at: Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn updated_at(mut self, at: Timestamp) -> Self {
        self.updated_at = Some(at);
        self
    }

    pub fn build(self) -> Category {
        // Microsecond precision, matching what the storage layer round-trips.
        let now = Utc::now().trunc_subsecs(6);
        Category::restore(CategoryProps {
            id: self.id.unwrap_or_else(CategoryId::new_v4),
            name: self.name.unwrap_or_else(|| "Movie".to_string()),
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        })
    }
}
