use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Restaurant as kept by the storage layer.
///
/// Every field is plain text; `rating` keeps whatever the caller typed rather
/// than a parsed number. `menu` order is significant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    #[serde(rename = "restaurantId")]
    pub id: String,
    #[serde(rename = "restaurantName")]
    pub name: String,
    pub rating: String,
    pub status: String,
    pub cuisine: String,
    pub location: String,
    #[serde(default)]
    pub menu: Vec<String>,
}

impl RestaurantRecord {
    /// Storage key of this record.
    pub fn key(&self) -> &str {
        &self.id
    }

    /// A record cannot be stored without a usable key.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_id(&self.id)
    }
}

pub fn validate_id(id: &str) -> Result<(), ModelError> {
    if id.trim().is_empty() {
        return Err(ModelError::Validation("restaurant id must not be blank".into()));
    }
    Ok(())
}
