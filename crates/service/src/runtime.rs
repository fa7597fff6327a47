//! Runtime wiring helpers
//!
//! Lets the binary build a file-backed service from a data file path
//! without depending directly on the storage modules.

use std::path::Path;

use crate::errors::ServiceError;
use crate::file::restaurant_store::JsonRestaurantStore;
use crate::restaurant::RestaurantService;

/// Open the JSON store at `data_file` and wrap it in a service.
pub async fn json_file_service(data_file: &Path) -> Result<RestaurantService<JsonRestaurantStore>, ServiceError> {
    let store = JsonRestaurantStore::open(data_file).await?;
    Ok(RestaurantService::new(store))
}
