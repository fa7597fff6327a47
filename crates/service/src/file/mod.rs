//! File-backed repository implementations.

pub mod restaurant_store;
