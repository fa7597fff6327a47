use async_trait::async_trait;
use models::restaurant::RestaurantRecord;

use crate::errors::ServiceError;

/// Keyed storage for restaurant records.
/// Implementations can be file-backed, database-backed, or remote KV.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Absent keys are `Ok(None)`, not an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<RestaurantRecord>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<RestaurantRecord>, ServiceError>;
    async fn save(&self, record: RestaurantRecord) -> Result<(), ServiceError>;
}

/// In-memory mock repository that records every call, for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockRestaurantRepository {
        records: Mutex<Vec<RestaurantRecord>>,
        find_by_id_calls: Mutex<Vec<String>>,
        find_all_calls: Mutex<usize>,
        saved: Mutex<Vec<RestaurantRecord>>,
        failure: Mutex<Option<String>>,
    }

    impl MockRestaurantRepository {
        /// Seed with records; `find_all` returns them in this order.
        pub fn with_records(records: Vec<RestaurantRecord>) -> Self {
            Self { records: Mutex::new(records), ..Default::default() }
        }

        /// Make every subsequent call fail with `ServiceError::Storage(message)`.
        pub fn fail_with(&self, message: impl Into<String>) {
            *self.failure.lock().unwrap() = Some(message.into());
        }

        pub fn find_by_id_calls(&self) -> Vec<String> {
            self.find_by_id_calls.lock().unwrap().clone()
        }

        pub fn find_all_calls(&self) -> usize {
            *self.find_all_calls.lock().unwrap()
        }

        /// Records passed to `save`, in call order.
        pub fn saved(&self) -> Vec<RestaurantRecord> {
            self.saved.lock().unwrap().clone()
        }

        fn check_failure(&self) -> Result<(), ServiceError> {
            match self.failure.lock().unwrap().as_ref() {
                Some(msg) => Err(ServiceError::Storage(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl RestaurantRepository for MockRestaurantRepository {
        async fn find_by_id(&self, id: &str) -> Result<Option<RestaurantRecord>, ServiceError> {
            self.find_by_id_calls.lock().unwrap().push(id.to_string());
            self.check_failure()?;
            let records = self.records.lock().unwrap();
            Ok(records.iter().find(|r| r.id == id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<RestaurantRecord>, ServiceError> {
            *self.find_all_calls.lock().unwrap() += 1;
            self.check_failure()?;
            Ok(self.records.lock().unwrap().clone())
        }

        async fn save(&self, record: RestaurantRecord) -> Result<(), ServiceError> {
            self.saved.lock().unwrap().push(record.clone());
            self.check_failure()?;
            let mut records = self.records.lock().unwrap();
            match records.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record,
                None => records.push(record),
            }
            Ok(())
        }
    }
}
