//! Repository trait and error types for rifle profiles.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::calculator::RifleProfile;
use crate::error::BallisticsError;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Requested rifle does not exist.
    #[error("Rifle not found: {id}")]
    NotFound { id: String },

    /// Profile failed validation before being stored.
    #[error("Data validation error: {0}")]
    Validation(#[from] BallisticsError),
}

impl RepositoryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        RepositoryError::NotFound { id: id.into() }
    }
}

/// Stored rifle profile with its generated identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rifle {
    pub id: String,
    #[serde(flatten)]
    pub profile: RifleProfile,
}

/// Repository trait for rifle profiles.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across handlers.
#[async_trait]
pub trait RifleRepository: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Validate and store a profile under a newly generated id.
    async fn create(&self, profile: RifleProfile) -> RepositoryResult<Rifle>;

    /// All stored rifles in creation order.
    async fn list(&self) -> RepositoryResult<Vec<Rifle>>;

    /// Fetch one rifle.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no rifle has this id
    async fn get(&self, id: &str) -> RepositoryResult<Rifle>;
}
