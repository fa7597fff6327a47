//! Service layer presenting restaurant records as domain objects.
//! - `restaurant` holds the domain type, the repository seam and the service.
//! - `file` and `storage` provide the JSON file-backed repository.

pub mod errors;
pub mod restaurant;
pub mod storage;
pub mod file;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

pub use restaurant::{Restaurant, RestaurantService};
