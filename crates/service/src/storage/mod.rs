//! Storage abstractions for service layer
//!
//! Reusable file-backed stores shared by repository implementations.

pub mod json_map_store;
