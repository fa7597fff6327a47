use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("restaurant record not found: {0}")]
    RecordNotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(id: Option<&str>) -> Self {
        match id {
            Some(id) => Self::RecordNotFound(format!("no restaurant with id {id:?}")),
            None => Self::RecordNotFound("no restaurant id supplied".into()),
        }
    }

    pub fn storage(e: impl std::fmt::Display) -> Self { Self::Storage(e.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::RecordNotFound(_) => 1003,
            ServiceError::Validation(_) => 1001,
            ServiceError::Storage(_) => 1200,
            ServiceError::Model(_) => 1002,
        }
    }
}
