//! Domain core for the category catalog.
//!
//! This crate has no internal dependencies so it can be used by the
//! persistence layer, the API layer, and any future CLI tooling. It holds
//! the `Category` aggregate, its validation/notification mechanism, the
//! generic filter/sort/paginate search pipeline, and the repository
//! contract both stores implement.

pub mod category;
pub mod error;
pub mod notification;
pub mod repository;
pub mod search;
pub mod testing;
pub mod types;
pub mod validation;
