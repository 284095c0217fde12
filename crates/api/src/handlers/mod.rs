//! HTTP handler implementations. Route modules mount these.

pub mod categories;
