use models::restaurant::RestaurantRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain restaurant (business view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub rating: String,
    pub status: String,
    pub cuisine: String,
    pub location: String,
    pub menu: Vec<String>,
}

impl Restaurant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rating: impl Into<String>,
        status: impl Into<String>,
        cuisine: impl Into<String>,
        location: impl Into<String>,
        menu: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating: rating.into(),
            status: status.into(),
            cuisine: cuisine.into(),
            location: location.into(),
            menu,
        }
    }

    /// Same as [`Restaurant::new`] with a fresh UUID v4 as the id.
    pub fn with_generated_id(
        name: impl Into<String>,
        rating: impl Into<String>,
        status: impl Into<String>,
        cuisine: impl Into<String>,
        location: impl Into<String>,
        menu: Vec<String>,
    ) -> Self {
        Self::new(Uuid::new_v4().to_string(), name, rating, status, cuisine, location, menu)
    }
}

impl From<RestaurantRecord> for Restaurant {
    fn from(record: RestaurantRecord) -> Self {
        let RestaurantRecord { id, name, rating, status, cuisine, location, menu } = record;
        Self { id, name, rating, status, cuisine, location, menu }
    }
}

impl From<Restaurant> for RestaurantRecord {
    fn from(restaurant: Restaurant) -> Self {
        let Restaurant { id, name, rating, status, cuisine, location, menu } = restaurant;
        Self { id, name, rating, status, cuisine, location, menu }
    }
}
