//! Shared runtime helpers: logging setup.

pub mod utils;
