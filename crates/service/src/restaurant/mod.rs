//! Restaurant module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::Restaurant;
pub use repository::RestaurantRepository;
pub use service::RestaurantService;
