#![cfg(test)]
use std::path::PathBuf;

use models::restaurant::RestaurantRecord;

use crate::restaurant::Restaurant;

pub fn sample_record(id: &str, name: &str) -> RestaurantRecord {
    RestaurantRecord {
        id: id.to_string(),
        name: name.to_string(),
        rating: "3".into(),
        status: "active".into(),
        cuisine: "cuisine".into(),
        location: "location".into(),
        menu: vec!["fries".into(), "shake".into()],
    }
}

pub fn sample_restaurant(id: &str, name: &str) -> Restaurant {
    Restaurant::from(sample_record(id, name))
}

/// Unique JSON file path under the system temp dir.
pub fn temp_json_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", uuid::Uuid::new_v4()))
}
