//! Persistence-layer shapes stored by restaurant repositories.

pub mod errors;
pub mod restaurant;
