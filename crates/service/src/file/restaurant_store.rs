use std::sync::Arc;

use models::restaurant::RestaurantRecord;

use crate::errors::ServiceError;
use crate::restaurant::repository::RestaurantRepository;
use crate::storage::json_map_store::JsonMapStore;

/// File storage: restaurant records persisted as a JSON map keyed by id.
#[derive(Clone)]
pub struct JsonRestaurantStore {
    store: Arc<JsonMapStore<String, RestaurantRecord>>,
}

impl JsonRestaurantStore {
    /// Open the store at `path`, creating an empty file if it does not exist.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonMapStore::<String, RestaurantRecord>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub async fn get(&self, id: &str) -> Option<RestaurantRecord> {
        self.store.get(&id.to_string()).await
    }

    /// All records sorted by id.
    pub async fn list(&self) -> Vec<RestaurantRecord> {
        let mut records = self.store.values().await;
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    /// Upsert by id.
    pub async fn put(&self, record: RestaurantRecord) -> Result<(), ServiceError> {
        record.validate()?;
        self.store.insert(record.key().to_string(), record).await
    }
}

#[async_trait::async_trait]
impl RestaurantRepository for JsonRestaurantStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<RestaurantRecord>, ServiceError> { Ok(self.get(id).await) }
    async fn find_all(&self) -> Result<Vec<RestaurantRecord>, ServiceError> { Ok(self.list().await) }
    async fn save(&self, record: RestaurantRecord) -> Result<(), ServiceError> { self.put(record).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_record, temp_json_path};

    #[tokio::test]
    async fn restaurant_store_save_find_and_reload() -> Result<(), anyhow::Error> {
        let tmp = temp_json_path("svc_restaurants");
        let store = JsonRestaurantStore::open(&tmp).await?;

        assert!(store.find_all().await?.is_empty());

        store.save(sample_record("b", "Second")).await?;
        store.save(sample_record("a", "First")).await?;
        let ids: Vec<_> = store.find_all().await?.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);

        let found = store.find_by_id("a").await?.expect("record a");
        assert_eq!(found, sample_record("a", "First"));
        assert!(store.find_by_id("zzz").await?.is_none());

        // reopen from disk
        let reopened = JsonRestaurantStore::open(&tmp).await?;
        assert_eq!(reopened.find_all().await?.len(), 2);
        assert_eq!(reopened.find_by_id("b").await?.map(|r| r.name), Some("Second".to_string()));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn restaurant_store_rejects_blank_id() -> Result<(), anyhow::Error> {
        let tmp = temp_json_path("svc_restaurants_blank");
        let store = JsonRestaurantStore::open(&tmp).await?;

        let result = store.save(sample_record("", "Nobody")).await;
        assert!(matches!(result, Err(ServiceError::Model(_))));
        assert!(store.list().await.is_empty());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
