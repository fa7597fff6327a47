use std::sync::Arc;

use models::restaurant::{validate_id, RestaurantRecord};
use tracing::{debug, info, instrument};

use super::domain::Restaurant;
use super::repository::RestaurantRepository;
use crate::errors::ServiceError;

/// Domain-shaped view over a restaurant repository.
/// Holds no state of its own; every call is one repository round trip.
pub struct RestaurantService<R: RestaurantRepository> {
    repo: Arc<R>,
}

impl<R: RestaurantRepository> RestaurantService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look up one restaurant.
    ///
    /// A missing or blank id fails with `RecordNotFound` without touching storage.
    ///
    /// # Examples
    /// ```
    /// use service::restaurant::{RestaurantService, repository::mock::MockRestaurantRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = RestaurantService::new(Arc::new(MockRestaurantRepository::default()));
    /// let err = tokio_test::block_on(svc.find_by_id(None)).unwrap_err();
    /// assert!(matches!(err, ServiceError::RecordNotFound(_)));
    /// ```
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Option<&str>) -> Result<Restaurant, ServiceError> {
        let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
            debug!("restaurant_lookup_without_id");
            return Err(ServiceError::not_found(None));
        };

        match self.repo.find_by_id(id).await? {
            Some(record) => Ok(Restaurant::from(record)),
            None => {
                debug!(restaurant_id = %id, "restaurant_not_found");
                Err(ServiceError::not_found(Some(id)))
            }
        }
    }

    /// Every stored restaurant, in the order the repository yields them.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Restaurant>, ServiceError> {
        let records = self.repo.find_all().await?;
        debug!(count = records.len(), "restaurants_listed");
        Ok(records.into_iter().map(Restaurant::from).collect())
    }

    /// Persist a caller-identified restaurant and hand it back.
    ///
    /// Saving an id that already exists replaces the stored record.
    ///
    /// # Examples
    /// ```
    /// use service::restaurant::{Restaurant, RestaurantService, repository::mock::MockRestaurantRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockRestaurantRepository::default());
    /// let svc = RestaurantService::new(repo.clone());
    /// let cafe = Restaurant::new("B2", "Cafe", "4", "active", "cafe", "2nd Ave", vec!["burger".into()]);
    /// let saved = tokio_test::block_on(svc.add_restaurant(cafe)).unwrap();
    /// assert_eq!(saved.id, "B2");
    /// assert_eq!(repo.saved().len(), 1);
    /// ```
    #[instrument(skip(self, restaurant), fields(restaurant_id = %restaurant.id))]
    pub async fn add_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant, ServiceError> {
        validate_id(&restaurant.id).map_err(|e| ServiceError::Validation(e.to_string()))?;

        let record = RestaurantRecord::from(restaurant.clone());
        self.repo.save(record).await?;
        info!(restaurant_id = %restaurant.id, name = %restaurant.name, "restaurant_saved");
        Ok(restaurant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::repository::mock::MockRestaurantRepository;
    use crate::test_support::{sample_record, sample_restaurant};

    fn service_with(records: Vec<RestaurantRecord>) -> (Arc<MockRestaurantRepository>, RestaurantService<MockRestaurantRepository>) {
        let repo = Arc::new(MockRestaurantRepository::with_records(records));
        (repo.clone(), RestaurantService::new(repo))
    }

    fn joes() -> RestaurantRecord {
        RestaurantRecord {
            id: "A1".into(),
            name: "Joe's".into(),
            rating: "3".into(),
            status: "active".into(),
            cuisine: "diner".into(),
            location: "Main St".into(),
            menu: vec!["fries".into(), "shake".into()],
        }
    }

    #[tokio::test]
    async fn find_by_id_valid_id_returns_restaurant() -> Result<(), anyhow::Error> {
        let record = joes();
        let (repo, svc) = service_with(vec![sample_record("Z9", "Other"), record.clone()]);

        let restaurant = svc.find_by_id(Some("A1")).await?;

        assert_eq!(restaurant.id, record.id);
        assert_eq!(restaurant.name, record.name);
        assert_eq!(restaurant.rating, record.rating);
        assert_eq!(restaurant.status, record.status);
        assert_eq!(restaurant.cuisine, record.cuisine);
        assert_eq!(restaurant.location, record.location);
        assert_eq!(restaurant.menu, vec!["fries".to_string(), "shake".to_string()]);
        assert_eq!(repo.find_by_id_calls(), vec!["A1".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn find_by_id_none_fails_without_querying_storage() {
        let (repo, svc) = service_with(vec![joes()]);

        let err = svc.find_by_id(None).await.unwrap_err();

        assert!(matches!(err, ServiceError::RecordNotFound(_)));
        assert!(repo.find_by_id_calls().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_blank_id_is_treated_as_missing() {
        let (repo, svc) = service_with(vec![joes()]);

        for blank in ["", "   "] {
            let err = svc.find_by_id(Some(blank)).await.unwrap_err();
            assert!(matches!(err, ServiceError::RecordNotFound(_)));
        }
        assert!(repo.find_by_id_calls().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_unknown_id_is_record_not_found() {
        let (repo, svc) = service_with(vec![joes()]);

        let err = svc.find_by_id(Some("missing")).await.unwrap_err();

        assert!(matches!(err, ServiceError::RecordNotFound(ref msg) if msg.contains("missing")));
        assert_eq!(err.code(), 1003);
        assert_eq!(repo.find_by_id_calls().len(), 1);
    }

    #[tokio::test]
    async fn find_all_maps_every_record_in_order() -> Result<(), anyhow::Error> {
        let mut second = sample_record("C3", "Restaurant Name2");
        second.rating = "4".into();
        second.menu = vec!["burger".into(), "hot-dog".into()];
        let (repo, svc) = service_with(vec![joes(), second.clone()]);

        let all = svc.find_all().await?;

        assert_eq!(all.len(), 2);
        assert_eq!(all[0], Restaurant::from(joes()));
        assert_eq!(all[1].id, "C3");
        assert_eq!(all[1].rating, "4");
        assert_eq!(all[1].menu, second.menu);
        assert_eq!(repo.find_all_calls(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() -> Result<(), anyhow::Error> {
        let (repo, svc) = service_with(vec![]);
        assert!(svc.find_all().await?.is_empty());
        assert_eq!(repo.find_all_calls(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn add_restaurant_saves_matching_record_once() -> Result<(), anyhow::Error> {
        let cafe = Restaurant::new(
            "B2",
            "Cafe",
            "4",
            "active",
            "cafe",
            "2nd Ave",
            vec!["burger".into(), "hot-dog".into()],
        );
        let (repo, svc) = service_with(vec![]);

        let returned = svc.add_restaurant(cafe.clone()).await?;

        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        let record = &saved[0];
        assert_eq!(record.id, "B2");
        assert_eq!(record.name, "Cafe");
        assert_eq!(record.rating, "4");
        assert_eq!(record.status, "active");
        assert_eq!(record.cuisine, "cafe");
        assert_eq!(record.location, "2nd Ave");
        assert_eq!(record.menu, vec!["burger".to_string(), "hot-dog".to_string()]);
        assert_eq!(returned, cafe);
        assert_eq!(returned.id, "B2");
        Ok(())
    }

    #[tokio::test]
    async fn added_restaurant_is_found_again() -> Result<(), anyhow::Error> {
        let (_repo, svc) = service_with(vec![]);
        let created = svc
            .add_restaurant(Restaurant::with_generated_id("Diner", "5", "active", "diner", "Elm St", vec!["pie".into()]))
            .await?;

        let found = svc.find_by_id(Some(created.id.as_str())).await?;
        assert_eq!(found, created);
        Ok(())
    }

    #[tokio::test]
    async fn add_restaurant_with_existing_id_replaces_record() -> Result<(), anyhow::Error> {
        let (_repo, svc) = service_with(vec![joes()]);
        let mut renamed = Restaurant::from(joes());
        renamed.name = "Joe's Diner".into();

        svc.add_restaurant(renamed).await?;

        let all = svc.find_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Joe's Diner");
        Ok(())
    }

    #[tokio::test]
    async fn add_restaurant_rejects_blank_id_before_saving() {
        let (repo, svc) = service_with(vec![]);
        let nameless = sample_restaurant(" ", "Ghost Kitchen");

        let err = svc.add_restaurant(nameless).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn storage_failures_propagate_unchanged() {
        let (repo, svc) = service_with(vec![joes()]);
        repo.fail_with("disk unplugged");

        let lookup = svc.find_by_id(Some("A1")).await.unwrap_err();
        assert!(matches!(lookup, ServiceError::Storage(ref m) if m == "disk unplugged"));

        let listing = svc.find_all().await.unwrap_err();
        assert!(matches!(listing, ServiceError::Storage(_)));

        let write = svc.add_restaurant(sample_restaurant("B2", "Cafe")).await.unwrap_err();
        assert!(matches!(write, ServiceError::Storage(_)));
        assert_eq!(write.code(), 1200);
    }
}
